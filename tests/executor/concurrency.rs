//! Shared handles across threads.

use std::sync::Arc;
use std::thread;

use serde_json::{json, Number};

use crate::common::*;

#[test]
fn concurrent_increments_are_not_lost() {
    let db = Arc::new(create_db_with("counter", json!({"n": 0})));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for _ in 0..50 {
                    db.num_incr_by("counter", ".n", 1).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(db.num_incr_by("counter", ".n", 0).unwrap(), Number::from(400));
}

#[test]
fn composite_queries_apply_whole() {
    let db = Arc::new(create_db_with("doc", json!({"a": 0, "b": 0})));

    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                db.apply_query("doc", json!({"a": i, "b": i})).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let doc = document(&db, "doc").unwrap();
    assert_eq!(doc["a"], doc["b"]);
}
