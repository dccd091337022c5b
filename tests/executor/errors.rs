//! Error classification and propagation.

use rejson::{Command, ConnectionError, Error, JsonPath};
use serde_json::json;

use crate::common::*;

#[test]
fn wrong_type_leaves_document_unchanged() {
    let db = create_db_with("doc", json!({"s": "text", "n": 1}));

    let err = db.num_incr_by("doc", ".s", 1).unwrap_err();
    assert!(matches!(err, Error::WrongType { .. }), "got {:?}", err);
    assert!(matches!(
        db.str_len("doc", ".n").unwrap_err(),
        Error::WrongType { .. }
    ));
    assert!(matches!(
        db.arr_append("doc", ".n", [1]).unwrap_err(),
        Error::WrongType { .. }
    ));
    assert_eq!(document(&db, "doc"), Some(json!({"s": "text", "n": 1})));
}

#[test]
fn missing_parent_is_store_error() {
    let db = create_db_with("doc", json!({}));

    let err = db.set("doc", ".a.b", json!(1)).unwrap_err();
    assert!(matches!(err, Error::Store { .. }), "got {:?}", err);
}

#[test]
fn new_document_below_root_is_store_error() {
    let db = create_db();

    assert!(matches!(
        db.set("doc", ".a", json!(1)).unwrap_err(),
        Error::Store { .. }
    ));
    assert_eq!(db.connection().key_count(), 0);
}

#[test]
fn absent_value_is_not_found() {
    let db = create_db_with("doc", json!({"a": []}));

    let err = db.arr_len("doc", ".missing").unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            key: "doc".into(),
            path: ".missing".into()
        }
    );
    assert!(matches!(db.obj_len("nope", ".").unwrap_err(), Error::NotFound { .. }));
}

#[test]
fn non_numeric_operand_rejected_before_send() {
    let db = create_db_with("doc", json!({"n": 1}));

    let err = db.num_incr_by("doc", ".n", "two").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {:?}", err);
    assert!(err.is_caller_error());
    assert_eq!(document(&db, "doc"), Some(json!({"n": 1})));
}

#[test]
fn unknown_operation() {
    let err = rejson::build("doc", &JsonPath::root(), "json.nope", vec![]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownOperation {
            name: "json.nope".into()
        }
    );
}

#[test]
fn mget_needs_two_keys() {
    let db = create_db_with("doc", json!({}));

    let err = db.mget(&["doc"], ".").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {:?}", err);
}

#[test]
fn closed_connection_is_transport_error() {
    let db = create_db_with("doc", json!({"a": 1}));
    db.connection().close();

    let err = db.get("doc", ".").unwrap_err();
    assert_eq!(
        err,
        Error::Transport {
            reason: ConnectionError::Closed.to_string()
        }
    );

    let err = db
        .executor()
        .execute_atomic(vec![Command::Del {
            key: "doc".into(),
            path: JsonPath::root(),
        }])
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
}

#[test]
fn errors_display() {
    let err = Error::NotFound {
        key: "doc".into(),
        path: ".a".into(),
    };
    assert_eq!(err.to_string(), "not found: doc at .a");
}
