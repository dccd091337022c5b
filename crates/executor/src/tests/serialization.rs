//! Serialization tests for Command, Output and Error.
//!
//! A compiled plan is a `Vec<Command>`, so it must survive a JSON round
//! trip unchanged.

use serde_json::json;

use crate::{Command, CompositeQuery, Error, JsonPath, JsonType, Output, Reply};

fn roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let text = serde_json::to_string(value).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_compiled_plan_roundtrip() {
    let plan = CompositeQuery::parse(json!({"a": {"b": 1, "c": {"$del": true}}, "d": [1]}).into())
        .unwrap()
        .compile("doc");
    assert_eq!(roundtrip(&plan), plan);
}

#[test]
fn test_command_wire_form() {
    let cmd = Command::Del {
        key: "doc".into(),
        path: JsonPath::new(".a."),
    };
    assert_eq!(
        serde_json::to_value(&cmd).unwrap(),
        json!({"Del": {"key": "doc", "path": ".a."}})
    );
}

#[test]
fn test_output_roundtrip() {
    let outputs = vec![
        Output::Nil,
        Output::Bool(true),
        Output::Json(json!({"x": [1, 2]}).into()),
        Output::JsonList(vec![None, Some(json!("v").into())]),
        Output::Int(-1),
        Output::Number(serde_json::Number::from_f64(1.5).unwrap()),
        Output::Keys(vec!["a".into()]),
        Output::Type(JsonType::Boolean),
        Output::Resp(Reply::Array(vec![Reply::Status("{".into())])),
    ];
    for output in outputs {
        assert_eq!(roundtrip(&output), output);
    }
}

#[test]
fn test_error_roundtrip() {
    let err = Error::WrongType {
        message: "ERR wrong type of path value - expected a number but found string".into(),
    };
    assert_eq!(roundtrip(&err), err);
}
