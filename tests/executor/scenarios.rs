//! Command round trips against the reference store.

use rejson::{JsonType, Reply};
use serde_json::{json, Number};

use crate::common::*;

#[test]
fn set_del_get() {
    let db = create_db_with("obj", json!({"foo": "bar", "is": 1}));

    assert!(db.del("obj", ".is").unwrap());
    assert_eq!(document(&db, "obj"), Some(json!({"foo": "bar"})));
    assert!(!db.del("obj", ".is").unwrap());
}

#[test]
fn arrappend_extends_array() {
    let db = create_db_with("k", json!({"b": [1, 2, 3]}));

    assert_eq!(db.arr_append("k", ".b", [4, 5, 6]).unwrap(), 6);
    assert_eq!(
        db.get("k", ".b").unwrap().map(|v| v.into_inner()),
        Some(json!([1, 2, 3, 4, 5, 6]))
    );
    assert_eq!(db.arr_len("k", ".b").unwrap(), 6);
}

#[test]
fn mget_follows_key_order() {
    let db = create_db();
    db.set("key1", ".", json!({"v": 1})).unwrap();
    db.set("key2", ".", json!({"v": 2})).unwrap();

    let values: Vec<_> = db
        .mget(&["key2", "key1", "missing"], ".v")
        .unwrap()
        .into_iter()
        .map(|v| v.map(|v| v.into_inner()))
        .collect();
    assert_eq!(values, vec![Some(json!(2)), Some(json!(1)), None]);
}

#[test]
fn get_does_not_mutate() {
    let db = create_db_with("doc", json!({"a": {"b": [1, "two", null]}}));

    let first = db.get("doc", ".a").unwrap();
    let second = db.get("doc", ".a").unwrap();
    assert_eq!(first, second);
    assert_eq!(document(&db, "doc"), Some(json!({"a": {"b": [1, "two", null]}})));
}

#[test]
fn get_missing_is_none() {
    let db = create_db_with("doc", json!({"a": 1}));

    assert_eq!(db.get("nope", ".").unwrap(), None);
    assert_eq!(db.get("doc", ".b").unwrap(), None);
}

#[test]
fn set_below_root_replaces_value() {
    let db = create_db_with("doc", json!({"a": 1, "b": {"c": true}}));

    assert!(db.set("doc", ".b.c", json!("yes")).unwrap());
    assert!(db.set("doc", ".d", json!([1])).unwrap());
    assert_eq!(
        document(&db, "doc"),
        Some(json!({"a": 1, "b": {"c": "yes"}, "d": [1]}))
    );
}

#[test]
fn forget_root_removes_key() {
    let db = create_db_with("doc", json!({"a": 1}));

    assert!(db.forget("doc", ".").unwrap());
    assert_eq!(db.connection().key_count(), 0);
    assert!(!db.del("doc", ".").unwrap());
}

#[test]
fn type_tags() {
    let db = create_db_with(
        "doc",
        json!({"o": {}, "a": [], "s": "x", "i": 1, "n": 1.5, "b": false, "z": null}),
    );

    assert_eq!(db.type_of("doc", ".").unwrap(), Some(JsonType::Object));
    assert_eq!(db.type_of("doc", ".a").unwrap(), Some(JsonType::Array));
    assert_eq!(db.type_of("doc", ".s").unwrap(), Some(JsonType::String));
    assert_eq!(db.type_of("doc", ".i").unwrap(), Some(JsonType::Integer));
    assert_eq!(db.type_of("doc", ".n").unwrap(), Some(JsonType::Number));
    assert_eq!(db.type_of("doc", ".b").unwrap(), Some(JsonType::Boolean));
    assert_eq!(db.type_of("doc", ".z").unwrap(), Some(JsonType::Null));
    assert_eq!(db.type_of("doc", ".missing").unwrap(), None);
}

#[test]
fn number_ops() {
    let db = create_db_with("doc", json!({"n": 1}));

    assert_eq!(db.num_incr_by("doc", ".n", 2).unwrap(), Number::from(3));
    assert_eq!(db.num_incr_by("doc", ".n", 0.5).unwrap().as_f64(), Some(3.5));
    assert_eq!(db.num_mult_by("doc", ".n", 2).unwrap().as_f64(), Some(7.0));
    assert_eq!(document(&db, "doc"), Some(json!({"n": 7.0})));
}

#[test]
fn string_ops() {
    let db = create_db_with("doc", json!({"s": "foo"}));

    assert_eq!(db.str_append("doc", ".s", "bar").unwrap(), 6);
    assert_eq!(db.str_len("doc", ".s").unwrap(), 6);
    assert_eq!(document(&db, "doc"), Some(json!({"s": "foobar"})));
}

#[test]
fn array_ops() {
    let db = create_db_with("doc", json!({"a": [1, "x", 3, "x"]}));

    assert_eq!(db.arr_index("doc", ".a", "x").unwrap(), 1);
    assert_eq!(db.arr_index("doc", ".a", 9).unwrap(), -1);

    assert_eq!(db.arr_insert("doc", ".a", 1, [7, 8]).unwrap(), 6);
    assert_eq!(
        db.get("doc", ".a").unwrap().map(|v| v.into_inner()),
        Some(json!([1, 7, 8, "x", 3, "x"]))
    );

    assert_eq!(
        db.arr_pop("doc", ".a", -1).unwrap().map(|v| v.into_inner()),
        Some(json!("x"))
    );
    assert_eq!(db.arr_trim("doc", ".a", 1, 2).unwrap(), 2);
    assert_eq!(
        db.get("doc", ".a").unwrap().map(|v| v.into_inner()),
        Some(json!([7, 8]))
    );
}

#[test]
fn arr_pop_empty_is_none() {
    let db = create_db_with("doc", json!({"a": []}));

    assert_eq!(db.arr_pop("doc", ".a", -1).unwrap(), None);
}

#[test]
fn object_ops() {
    let db = create_db_with("doc", json!({"foo": 1, "chic": 2, "bar": {}}));

    assert_eq!(db.obj_keys("doc", ".").unwrap(), vec!["foo", "chic", "bar"]);
    assert_eq!(db.obj_len("doc", ".").unwrap(), 3);
    assert_eq!(db.obj_len("doc", ".bar").unwrap(), 0);
}

#[test]
fn resp_form() {
    let db = create_db_with("doc", json!({"a": [1, "b", null]}));

    assert_eq!(
        db.resp("doc", ".a").unwrap(),
        Reply::Array(vec![
            Reply::Status("[".into()),
            Reply::Integer(1),
            Reply::Bulk("b".into()),
            Reply::Nil,
        ])
    );
}

#[test]
fn transaction_runs_in_order() {
    let db = create_db();
    let mut tx = db.executor().transaction();
    tx.push(rejson::build("doc", &".".into(), "set", vec![json!({"n": 1}).into()]).unwrap());
    tx.push(rejson::build("doc", &".n".into(), "numincrby", vec![4i64.into()]).unwrap());
    tx.push(rejson::build("doc", &".n".into(), "get", vec![]).unwrap());

    let results = tx.execute().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2], Ok(rejson::Output::Json(json!(5).into())));
}

#[test]
fn debug_memory_reports_encoded_size() {
    let db = create_db_with("doc", json!({"name": "Alice", "tags": ["a", "b"]}));

    assert_eq!(db.debug_memory("doc", ".tags").unwrap(), r#"["a","b"]"#.len() as i64);
    let whole = db.debug_memory("doc", ".").unwrap();
    assert_eq!(whole, r#"{"name":"Alice","tags":["a","b"]}"#.len() as i64);
    assert!(db.str_append("doc", ".name", "!").is_ok());
    assert_eq!(db.debug_memory("doc", ".").unwrap(), whole + 1);
}
