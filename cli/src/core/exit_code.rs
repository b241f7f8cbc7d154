use crate::core::error::ClirkError;

/// Exit codes for the clirk CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Invalid command line usage (reported by clap)
    UsageError = 2,
    /// Configuration error (log level)
    ConfigError = 3,
    /// Collection file could not be read or parsed
    LoadError = 4,
    /// Request not found in the collection
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Variable resolution error
    VariableError = 8,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&ClirkError> for ExitCode {
    fn from(error: &ClirkError) -> Self {
        match error {
            ClirkError::Load(_) => ExitCode::LoadError,
            ClirkError::RequestNotFound(_) => ExitCode::NotFoundError,
            ClirkError::MissingVariable(_) => ExitCode::VariableError,
            ClirkError::MalformedOverride(_) => ExitCode::UsageError,
            ClirkError::Transport(_) => ExitCode::NetworkError,
            ClirkError::Config(_) => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::http::HttpError;
    use crate::collection::error::{LoadError, MaterializeError, VariableError};

    #[test]
    fn test_exit_codes() {
        let cases: Vec<(ClirkError, i32)> = vec![
            (LoadError::Invalid("x".to_string()).into(), 4),
            (
                LoadError::Io {
                    path: "missing.json".to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
                .into(),
                4,
            ),
            (ClirkError::RequestNotFound("/x".to_string()), 5),
            (
                MaterializeError::MissingVariable {
                    name: "A".to_string(),
                    field: "url".to_string(),
                }
                .into(),
                8,
            ),
            (VariableError::MalformedOverride("A".to_string()).into(), 2),
            (HttpError::Network("down".to_string()).into(), 6),
            (ClirkError::Config("bad".to_string()), 3),
        ];

        for (error, expected) in cases {
            assert_eq!(ExitCode::from(&error).code(), expected, "{error}");
        }
    }
}
