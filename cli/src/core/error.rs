use crate::client::http::HttpError;
use crate::collection::error::{LoadError, MaterializeError, VariableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClirkError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Request not found: {0}")]
    RequestNotFound(String),

    #[error("{0}")]
    MissingVariable(#[from] MaterializeError),

    #[error("{0}")]
    MalformedOverride(#[from] VariableError),

    #[error("{0}")]
    Transport(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClirkError {
    /// Response status and body to echo verbatim when the server answered with an error.
    pub fn response_details(&self) -> Option<(u16, &str)> {
        match self {
            ClirkError::Transport(HttpError::Status { status, body }) => {
                Some((*status, body.as_str()))
            }
            _ => None,
        }
    }
}
