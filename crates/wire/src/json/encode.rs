//! JSON encoding of command arguments

use rejson_core::JsonValue;

/// Encode a value to its compact JSON text.
///
/// Strings come out quoted and escaped, mappings keep their insertion order.
pub fn encode_json(value: &JsonValue) -> String {
    value.to_json_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_string_is_quoted() {
        assert_eq!(encode_json(&JsonValue::from("ma2p")), r#""ma2p""#);
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode_json(&JsonValue::from(1i64)), "1");
        assert_eq!(encode_json(&JsonValue::from(3.5)), "3.5");
        assert_eq!(encode_json(&JsonValue::from(true)), "true");
        assert_eq!(encode_json(&JsonValue::null()), "null");
    }

    #[test]
    fn test_encode_object_is_compact() {
        let v = JsonValue::from(json!({"foo": "bar", "n": [1, 2]}));
        assert_eq!(encode_json(&v), r#"{"foo":"bar","n":[1,2]}"#);
    }
}
