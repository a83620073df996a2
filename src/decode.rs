//! Strict JSON-array decoding of sanitized model output.

use serde_json::Value;

use crate::error::SentimentError;

/// Parses the sanitized text as a JSON array.
///
/// Any well-formed JSON array is accepted as-is; no schema validation is
/// performed against the sentiment record shape. On failure the error carries
/// `raw` — the unmodified model output — for manual inspection.
///
/// # Arguments
///
/// * `cleaned` - Sanitized text expected to be a JSON array
/// * `raw` - The raw, unmodified model output
pub fn decode_array(cleaned: &str, raw: &str) -> Result<Vec<Value>, SentimentError> {
    let value: Value = serde_json::from_str(cleaned).map_err(|err| SentimentError::DecodeError {
        message: err.to_string(),
        raw_output: raw.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(SentimentError::DecodeError {
            message: format!("expected a JSON array, got {}", type_name(&other)),
            raw_output: raw.to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
