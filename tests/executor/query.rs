//! Composite queries applied as one atomic batch.

use rejson::{Error, Output};
use serde_json::json;

use crate::common::*;

#[test]
fn nested_leaves_are_set() {
    let db = create_db_with("user", json!({"name": "Al", "address": {"city": "X"}}));

    let results = db
        .apply_query(
            "user",
            json!({"name": "Alice", "address": {"city": "Sydney", "zip": 2000}}),
        )
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r == &Ok(Output::Bool(true))));
    assert_eq!(
        document(&db, "user"),
        Some(json!({"name": "Alice", "address": {"city": "Sydney", "zip": 2000}}))
    );
}

#[test]
fn set_operator_writes_value_verbatim() {
    let db = create_db_with("doc", json!({"meta": {"tags": ["a"]}}));

    db.apply_query("doc", json!({"meta": {"$set": {"nested": {"x": 1}}}}))
        .unwrap();
    assert_eq!(
        document(&db, "doc"),
        Some(json!({"meta": {"nested": {"x": 1}}}))
    );
}

#[test]
fn del_operator_removes_field() {
    let db = create_db_with("doc", json!({"a": 1, "b": {"c": 2, "d": 3}}));

    let results = db
        .apply_query("doc", json!({"a": {"$del": true}, "b": {"c": {"$del": true}}}))
        .unwrap();
    assert_eq!(results, vec![Ok(Output::Int(1)), Ok(Output::Int(1))]);
    assert_eq!(document(&db, "doc"), Some(json!({"b": {"d": 3}})));
}

#[test]
fn failing_branch_does_not_stop_siblings() {
    let db = create_db_with("doc", json!({"a": 1}));

    let results = db
        .apply_query("doc", json!({"x": {"y": 1}, "a": 2}))
        .unwrap();
    assert!(matches!(results[0], Err(Error::Store { .. })));
    assert_eq!(results[1], Ok(Output::Bool(true)));
    assert_eq!(document(&db, "doc"), Some(json!({"a": 2})));
}

#[test]
fn malformed_query_sends_nothing() {
    let db = create_db_with("doc", json!({"a": 1}));

    for query in [
        json!([1, 2]),
        json!("a"),
        json!({"$set": 1}),
        json!({"a": {"$set": 1, "b": 2}}),
        json!({"a": {"$del": false}}),
    ] {
        let err = db.apply_query("doc", query.clone()).unwrap_err();
        assert!(matches!(err, Error::InvalidQuery { .. }), "{} gave {:?}", query, err);
    }
    assert_eq!(document(&db, "doc"), Some(json!({"a": 1})));
}

#[test]
fn empty_query_is_a_no_op() {
    let db = create_db_with("doc", json!({"a": 1}));

    assert_eq!(db.apply_query("doc", json!({})).unwrap(), vec![]);
    assert_eq!(document(&db, "doc"), Some(json!({"a": 1})));
}

#[test]
fn null_and_array_leaves_are_set() {
    let db = create_db_with("doc", json!({"a": 1, "b": {}}));

    db.apply_query("doc", json!({"a": null, "b": {"list": [1, {"k": 2}]}}))
        .unwrap();
    assert_eq!(
        document(&db, "doc"),
        Some(json!({"a": null, "b": {"list": [1, {"k": 2}]}}))
    );
}

mod properties {
    use proptest::prelude::*;
    use serde_json::{json, Value};

    use crate::common::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn flat_query_produces_its_leaves(fields in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 1..8)) {
            let db = create_db_with("doc", json!({}));
            let query: Value = fields.iter().map(|(k, v)| (k.clone(), json!(v))).collect::<serde_json::Map<_, _>>().into();

            let results = db.apply_query("doc", query.clone()).unwrap();
            prop_assert_eq!(results.len(), fields.len());
            prop_assert!(results.iter().all(|r| r.is_ok()));
            prop_assert_eq!(document(&db, "doc"), Some(query));
        }

        #[test]
        fn deleting_every_field_empties_document(fields in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 1..8)) {
            let db = create_db_with("doc", json!(fields));
            let query: Value = fields.keys().map(|k| (k.clone(), json!({"$del": true}))).collect::<serde_json::Map<_, _>>().into();

            db.apply_query("doc", query).unwrap();
            prop_assert_eq!(document(&db, "doc"), Some(json!({})));
        }
    }
}
