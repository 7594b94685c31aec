use serde_json::Value;
use thiserror::Error;

use super::record::AngleRecord;

/// Why a `selected_points` string could not be read as a list of records.
#[derive(Debug, Error)]
pub enum SelectionParseError {
    /// Input is not valid JSON.
    #[error("selected_points is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Input is valid JSON but not an array.
    #[error("selected_points must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

/// Parse a `selected_points` document into records, preserving order.
pub fn parse_selected_points(input: &str) -> Result<Vec<AngleRecord>, SelectionParseError> {
    let document: Value = serde_json::from_str(input)?;
    match document {
        Value::Array(items) => Ok(items.iter().map(AngleRecord::from_value).collect()),
        other => Err(SelectionParseError::NotAnArray { found: json_type_name(&other) }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
