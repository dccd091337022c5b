//! JSON decoding of store replies

use rejson_core::JsonValue;
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Invalid number format
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Empty input
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

/// Decode a JSON text to a value.
pub fn decode_json(json: &str) -> Result<JsonValue, DecodeError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::UnexpectedEnd);
    }
    trimmed
        .parse::<JsonValue>()
        .map_err(|e| DecodeError::InvalidJson(e.to_string()))
}

/// Decode a bare numeral as returned by increment/multiply commands.
///
/// Integers stay integers (`i64`, then `u64`), everything else is parsed as
/// a finite `f64`. The store's arithmetic is taken as-is.
pub fn decode_number(text: &str) -> Result<serde_json::Number, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::UnexpectedEnd);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i.into());
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Ok(u.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| DecodeError::InvalidNumber(trimmed.to_string()))
}
