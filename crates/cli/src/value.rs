//! String → JsonValue parsing rules.
//!
//! Command arguments are parsed into `JsonValue` using auto-detect logic:
//! 1. Valid JSON text (`{"a":1}`, `[1]`, `"x"`, `42`, `1.5`, `true`, `null`) → that value
//! 2. Everything else → a JSON string
//!
//! So `JSON.STRAPPEND doc .s bar` appends `"bar"`, while
//! `JSON.SET doc .n 42` stores the number 42.

use rejson_executor::JsonValue;

/// Auto-detect the JSON value of a user-supplied token.
pub fn parse_value(s: &str) -> JsonValue {
    match serde_json::from_str::<serde_json::Value>(s) {
        Ok(json) => JsonValue::from(json),
        Err(_) => JsonValue::from(s),
    }
}

/// Strict JSON parsing. Input must be valid JSON.
pub fn parse_json_value(s: &str) -> Result<JsonValue, String> {
    let json: serde_json::Value =
        serde_json::from_str(s).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(JsonValue::from(json))
}
