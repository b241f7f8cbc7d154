use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid collection: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("Malformed variable override '{0}': expected KEY=VALUE")]
    MalformedOverride(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unresolved variable: '{name}'")]
    MissingVariable { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializeError {
    #[error("Unresolved variable '{name}' in {field}")]
    MissingVariable { name: String, field: String },
}

impl MaterializeError {
    pub fn from_template(error: TemplateError, field: impl Into<String>) -> Self {
        match error {
            TemplateError::MissingVariable { name } => MaterializeError::MissingVariable {
                name,
                field: field.into(),
            },
        }
    }
}
