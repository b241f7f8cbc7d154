use crate::collection::variables::parse_override;
use std::time::Duration;

pub fn validate_variable(variable: &str) -> Result<String, String> {
    parse_override(variable)
        .map(|_| variable.to_string())
        .map_err(|_| "Variable must be in format KEY=VALUE".to_string())
}

pub fn validate_timeout(timeout: &str) -> Result<Duration, String> {
    let duration = timeout
        .parse::<f64>()
        .ok()
        .filter(|secs| *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok());

    match duration {
        Some(duration) => Ok(duration),
        None => Err(format!(
            "Timeout must be a positive number of seconds, got '{timeout}'"
        )),
    }
}
