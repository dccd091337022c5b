//! Shared test utilities.

use rejson::{MemoryStore, ReJson};
use serde_json::Value;

/// Fresh handle over an empty store.
pub fn create_db() -> ReJson<MemoryStore> {
    ReJson::new(MemoryStore::new())
}

/// Handle with `doc` stored under `key`.
pub fn create_db_with(key: &str, doc: Value) -> ReJson<MemoryStore> {
    let db = create_db();
    assert!(db.set(key, ".", doc).unwrap());
    db
}

/// Current document under `key`, read back through `JSON.GET`.
pub fn document(db: &ReJson<MemoryStore>, key: &str) -> Option<Value> {
    db.get(key, ".").unwrap().map(|v| v.into_inner())
}
