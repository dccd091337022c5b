//! rejson - Path-addressed JSON document commands for RedisJSON-style stores
//!
//! rejson builds, sends and decodes the `JSON.*` command family: whole or
//! partial document writes, reads, number/string/array/object edits, and
//! composite queries that apply nested field updates to one document as a
//! single atomic batch.
//!
//! # Quick Start
//!
//! ```
//! use rejson::{MemoryStore, ReJson};
//! use serde_json::json;
//!
//! let db = ReJson::new(MemoryStore::new());
//!
//! db.set("doc", ".", json!({"b": [1, 2, 3]}))?;
//! assert_eq!(db.arr_append("doc", ".b", [4, 5, 6])?, 6);
//! assert_eq!(db.get("doc", ".b")?, Some(json!([1, 2, 3, 4, 5, 6]).into()));
//! # Ok::<(), rejson::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which builds each
//! [`Command`] against the static catalog, sends it over a [`Connection`]
//! and decodes the [`Reply`]. The [`ReJson`] struct provides a typed
//! method per operation on top.
//!
//! [`MemoryStore`] is the in-process reference store. Any other transport
//! only needs to implement [`Connection`].

// Re-export the public API from rejson-executor
pub use rejson_executor::*;

pub use rejson_engine::MemoryStore;

/// JSON argument codec used on the wire
pub use rejson_wire::{decode_json, decode_number, encode_json, DecodeError};
