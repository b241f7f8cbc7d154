use super::error::VariableError;
use super::model::CollectionVariable;
use std::collections::HashMap;

pub type VariableTable = HashMap<String, String>;

/// Splits a `KEY=VALUE` override on its first `=`.
pub fn parse_override(raw: &str) -> Result<(String, String), VariableError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(VariableError::MalformedOverride(raw.to_string())),
    }
}

/// Collection variables first, then CLI overrides, so overrides win on collision.
pub fn merge_variables(
    collection_variables: &[CollectionVariable],
    overrides: &[String],
) -> Result<VariableTable, VariableError> {
    let mut table = VariableTable::new();

    for var in collection_variables {
        table.insert(var.key.clone(), var.value.clone());
    }

    for raw in overrides {
        let (key, value) = parse_override(raw)?;
        if let Some(previous) = table.insert(key.clone(), value) {
            log::debug!("Variable '{key}' overridden from the command line (was '{previous}')");
        }
    }

    log::debug!("Resolved {} variable(s)", table.len());
    Ok(table)
}
