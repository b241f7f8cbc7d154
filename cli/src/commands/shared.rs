use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "The exported Postman collection to act upon"
    )]
    pub file: String,
}

#[derive(Debug, Args)]
pub struct VariableArgs {
    #[arg(
        short = 'e',
        long = "environment",
        alias = "variable",
        value_name = "KEY=VALUE",
        help = "Set a variable value, overriding the collection's own (repeatable)",
        value_parser = validators::validate_variable
    )]
    pub variables: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RequestPathArgs {
    #[arg(
        value_name = "REQUEST_PATH",
        help = "Full path of the request, as printed by the list command (e.g. /Auth/Login)"
    )]
    pub request_path: String,
}
