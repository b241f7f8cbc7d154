use crate::client::{ClirkClient, ClirkConfig};
use crate::commands::shared::{OutputArgs, RequestPathArgs, SourceArgs, VariableArgs};
use crate::commands::validators;
use crate::core::error::ClirkError;
use clap::Args;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub variable_args: VariableArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub request: RequestPathArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub variable_args: VariableArgs,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help = "Give up on the request after this many seconds (no timeout by default)",
        value_parser = validators::validate_timeout
    )]
    pub timeout: Option<Duration>,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub request: RequestPathArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), ClirkError> {
    let groups = ClirkClient::list_requests(Path::new(&args.source.file))?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_groups(&groups, "No requests found"));

    Ok(())
}

pub fn execute_show(args: &ShowArgs) -> Result<(), ClirkError> {
    let client = ClirkClient::new(ClirkConfig {
        file: args.source.file.clone(),
        request_path: args.request.request_path.clone(),
        variables: args.variable_args.variables.clone(),
        timeout: None,
    });
    let details = client.get_request_details()?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_details(&details));

    Ok(())
}

pub async fn execute_run(args: &RunArgs) -> Result<(), ClirkError> {
    let client = ClirkClient::new(ClirkConfig {
        file: args.source.file.clone(),
        request_path: args.request.request_path.clone(),
        variables: args.variable_args.variables.clone(),
        timeout: args.timeout,
    });
    let result = client.run().await?;

    log::debug!("--- HTTP Response ---");
    log::debug!("Response status: {} ({} ms)", result.status, result.elapsed_ms);
    for (key, value) in &result.response_headers {
        log::debug!("  {key}: {value}");
    }
    log::debug!("--- End Response ---");

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_execution(&result));

    Ok(())
}
