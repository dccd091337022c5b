//! Tests for atomic batch execution and composite queries.
//!
//! These verify that commands are built before anything is sent, that a
//! batch runs as one unit with replies in issuance order, and that a
//! failing command only fails its own slot.

use rejson_wire::{ConnectionError, Reply};
use serde_json::json;

use super::recording::{Mode, RecordingConnection};
use crate::{Command, CompositeQuery, Error, Executor, JsonPath, JsonValue, Output, ReJson};

fn seeded(doc: serde_json::Value) -> ReJson<RecordingConnection> {
    let db = ReJson::new(RecordingConnection::new());
    assert!(db.set("doc", ".", doc).unwrap());
    db
}

#[test]
fn test_execute_atomic_empty_opens_no_batch() {
    let executor = Executor::new(RecordingConnection::new());
    let results = executor.execute_atomic(vec![]).unwrap();
    assert!(results.is_empty());
    assert!(executor.connection().batches().is_empty());
}

#[test]
fn test_execute_atomic_preserves_order() {
    let db = seeded(json!({"a": 1, "b": "x", "c": [1]}));
    let results = db
        .executor()
        .execute_atomic(vec![
            Command::Get { key: "doc".into(), path: JsonPath::new(".c") },
            Command::Get { key: "doc".into(), path: JsonPath::new(".a") },
            Command::Type { key: "doc".into(), path: JsonPath::new(".b") },
        ])
        .unwrap();

    assert_eq!(
        results,
        vec![
            Ok(Output::Json(json!([1]).into())),
            Ok(Output::Json(json!(1).into())),
            Ok(Output::Type(rejson_core::JsonType::String)),
        ]
    );
    let batches = db.connection().batches();
    assert_eq!(batches.len(), 1);
    let sent: Vec<_> = batches[0].iter().map(|c| c.args[1].as_str()).collect();
    assert_eq!(sent, vec![".c", ".a", ".b"]);
}

#[test]
fn test_build_failure_sends_nothing() {
    let executor = Executor::new(RecordingConnection::new());
    let err = executor
        .execute_atomic(vec![
            Command::Get { key: "doc".into(), path: JsonPath::root() },
            Command::MGet { keys: vec!["only".into()], path: JsonPath::root() },
        ])
        .unwrap_err();
    assert!(err.is_caller_error());
    assert!(executor.connection().batches().is_empty());
    assert!(executor.connection().commands().is_empty());
}

#[test]
fn test_failing_command_keeps_siblings() {
    let db = seeded(json!({"n": 1, "s": "text"}));
    let results = db
        .executor()
        .execute_atomic(vec![
            Command::NumIncrBy { key: "doc".into(), path: JsonPath::new(".s"), by: 1i64.into() },
            Command::NumIncrBy { key: "doc".into(), path: JsonPath::new(".n"), by: 2i64.into() },
        ])
        .unwrap();

    assert!(matches!(results[0], Err(Error::WrongType { .. })));
    assert_eq!(results[1], Ok(Output::Number(3i64.into())));
    assert_eq!(db.get("doc", ".s").unwrap(), Some(JsonValue::from("text")));
}

#[test]
fn test_transport_failure_fails_whole_call() {
    let executor = Executor::new(RecordingConnection::with_mode(Mode::Fail(ConnectionError::Io(
        "reset by peer".into(),
    ))));
    let err = executor
        .execute_atomic(vec![Command::Get { key: "doc".into(), path: JsonPath::root() }])
        .unwrap_err();
    assert_eq!(
        err,
        Error::Transport {
            reason: "I/O error: reset by peer".into()
        }
    );
}

#[test]
fn test_reply_count_mismatch_is_internal() {
    let executor = Executor::new(RecordingConnection::with_mode(Mode::Replies(vec![Reply::ok()])));
    let err = executor
        .execute_atomic(vec![
            Command::Get { key: "a".into(), path: JsonPath::root() },
            Command::Get { key: "b".into(), path: JsonPath::root() },
        ])
        .unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
}

#[test]
fn test_scripted_replies_decode_per_command() {
    let executor = Executor::new(RecordingConnection::with_mode(Mode::Replies(vec![
        Reply::Integer(0),
        Reply::Bulk("2.5".into()),
    ])));
    let results = executor
        .execute_atomic(vec![
            Command::Del { key: "a".into(), path: JsonPath::root() },
            Command::NumMultBy { key: "a".into(), path: JsonPath::new(".x"), by: 2i64.into() },
        ])
        .unwrap();
    assert_eq!(results[0], Ok(Output::Bool(false)));
    match &results[1] {
        Ok(Output::Number(n)) => assert_eq!(n.as_f64(), Some(2.5)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_apply_query_runs_one_batch() {
    let db = seeded(json!({"name": "Al", "address": {"city": "Oslo"}}));
    let results = db
        .apply_query(
            "doc",
            json!({"name": "Alice", "address": {"zip": 2000, "city": {"$del": true}}}),
        )
        .unwrap();

    assert_eq!(
        results,
        vec![Ok(Output::Bool(true)), Ok(Output::Bool(true)), Ok(Output::Bool(true))]
    );
    assert_eq!(
        db.get("doc", ".").unwrap(),
        Some(json!({"name": "Alice", "address": {"zip": 2000}}).into())
    );

    let batches = db.connection().batches();
    assert_eq!(batches.len(), 1);
    let rendered: Vec<String> = batches[0].iter().map(|c| c.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            r#"JSON.SET doc .name. "Alice""#,
            "JSON.SET doc .address.zip. 2000",
            "JSON.DEL doc .address.city.",
        ]
    );
}

#[test]
fn test_apply_query_malformed_sends_nothing() {
    let db = ReJson::new(RecordingConnection::new());
    let err = db
        .apply_query("doc", json!({"a": {"$del": 1}}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidQuery { .. }));
    assert!(db.connection().batches().is_empty());
}

#[test]
fn test_apply_query_missing_parent_fails_its_slot() {
    let db = seeded(json!({"a": 1}));
    let results = db
        .apply_query("doc", json!({"a": 2, "missing": {"x": 1}}))
        .unwrap();
    assert_eq!(results[0], Ok(Output::Bool(true)));
    assert!(matches!(results[1], Err(Error::Store { .. })));
    assert_eq!(db.get("doc", ".a").unwrap(), Some(JsonValue::from(2i64)));
}

#[test]
fn test_compiled_plan_matches_apply() {
    let query = json!({"x": {"y": [1, 2]}, "z": null});
    let plan = CompositeQuery::parse(query.into()).unwrap().compile("doc");
    let paths: Vec<_> = plan
        .iter()
        .map(|c| match c {
            Command::Set { path, .. } => path.as_str().to_string(),
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(paths, vec![".x.y.", ".z."]);
}
