use crate::client::{RequestDetails, RequestExecutionResult, RequestGroup};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(model: &T) -> String {
    let mut out = serde_json::to_string_pretty(model).unwrap_or_default();
    out.push('\n');
    out
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    /// `list` output: one header per group, then each request's full path and name.
    pub fn format_groups(&self, groups: &[RequestGroup], empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Json => to_json(groups),
            OutputFormat::Text if groups.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text => {
                let mut out = String::new();
                for group in groups {
                    out.push_str(&format!("{}\n", group.group));
                    for request in &group.requests {
                        out.push_str(&format!(
                            "  full path: \"{}\". Name: \"{}\"\n",
                            request.path, request.name
                        ));
                    }
                }
                out
            }
        }
    }

    pub fn format_details(&self, details: &RequestDetails) -> String {
        match self.engine {
            OutputFormat::Json => to_json(details),
            OutputFormat::Text => {
                let mut out = format!(
                    "Request: \"{}\" {} {}\n",
                    details.path, details.method, details.url
                );
                for (name, value) in &details.headers {
                    out.push_str(&format!("{name}: {value}\n"));
                }
                if let Some(body) = &details.body {
                    out.push('\n');
                    out.push_str(body);
                    if !body.ends_with('\n') {
                        out.push('\n');
                    }
                }
                out
            }
        }
    }

    pub fn format_execution(&self, result: &RequestExecutionResult) -> String {
        match self.engine {
            OutputFormat::Json => to_json(result),
            OutputFormat::Text => {
                let mut out = format!(
                    "Request: \"{}\" {} {}\n",
                    result.path, result.method, result.url
                );
                out.push_str(&format!(
                    "status: {} ({} ms)\n",
                    result.status, result.elapsed_ms
                ));
                if !result.response_headers.is_empty() {
                    out.push_str("headers:\n");
                    for (name, value) in &result.response_headers {
                        out.push_str(&format!("  {name}: {value}\n"));
                    }
                }
                if !result.body.is_empty() {
                    out.push_str("body:\n");
                    out.push_str(&crate::core::json::pretty_body(&result.body));
                    out.push('\n');
                }
                out
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
