//! Argument codec as exposed by the facade crate.

use rejson::{decode_json, decode_number, encode_json, DecodeError, JsonValue};
use serde_json::json;

use crate::common::*;

#[test]
fn encoded_argument_matches_stored_document() {
    let value: JsonValue = json!({"name": "Alice", "tags": ["a", "b"], "zip": 2000}).into();
    let db = create_db();
    db.set("doc", ".", value.clone()).unwrap();

    let text = encode_json(&value);
    assert_eq!(text, r#"{"name":"Alice","tags":["a","b"],"zip":2000}"#);
    assert_eq!(decode_json(&text).unwrap(), value);
    assert_eq!(db.get("doc", ".").unwrap(), Some(value));
}

#[test]
fn numeric_replies_keep_their_kind() {
    assert_eq!(decode_number("42").unwrap().as_i64(), Some(42));
    assert_eq!(decode_number("2.5").unwrap().as_f64(), Some(2.5));
    assert!(matches!(decode_number("abc"), Err(DecodeError::InvalidNumber(_))));
    assert_eq!(decode_json("  "), Err(DecodeError::UnexpectedEnd));
}
