//! Typed access to request parameters.

use serde_json::{Map, Value};

use super::errors::CommandError;

/// Returns a required string parameter.
///
/// # Errors
///
/// Returns [`CommandError::Protocol`] when the key is absent or the value is
/// not a string.
pub(crate) fn required_str<'a>(
    params: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, CommandError> {
    match params.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(CommandError::protocol(format!(
            "parameter '{key}' must be a string"
        ))),
        None => Err(CommandError::protocol(format!("missing parameter '{key}'"))),
    }
}

/// Returns a required array-of-strings parameter.
///
/// # Errors
///
/// Returns [`CommandError::Protocol`] when the key is absent, the value is
/// not an array, or an element is not a string.
pub(crate) fn required_string_list(
    params: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, CommandError> {
    let Some(value) = params.get(key) else {
        return Err(CommandError::protocol(format!("missing parameter '{key}'")));
    };
    let Value::Array(items) = value else {
        return Err(CommandError::protocol(format!(
            "parameter '{key}' must be an array of strings"
        )));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) => Ok(text.clone()),
            _ => Err(CommandError::protocol(format!(
                "parameter '{key}[{index}]' must be a string"
            ))),
        })
        .collect()
}
