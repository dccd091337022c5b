//! # rejson Executor
//!
//! The command layer of the rejson client for RedisJSON-style document
//! stores.
//!
//! This is the only crate users need to import. It provides:
//! - [`ReJson`] - Typed methods, one per document operation
//! - [`Command`]/[`Output`] - Low-level command interface
//! - [`build`] - The path-addressed command builder over the static catalog
//! - [`CompositeQuery`] - Compiles nested field updates into one atomic batch
//!
//! ## Quick Start
//!
//! ```
//! use rejson_engine::MemoryStore;
//! use rejson_executor::ReJson;
//! use serde_json::json;
//!
//! let db = ReJson::new(MemoryStore::new());
//!
//! db.set("obj", ".", json!({"foo": "bar", "is": 1}))?;
//! assert!(db.del("obj", ".is")?);
//! assert_eq!(db.get("obj", ".")?, Some(json!({"foo": "bar"}).into()));
//! assert!(!db.del("obj", ".is")?);
//! # Ok::<(), rejson_executor::Error>(())
//! ```
//!
//! ## Operations
//!
//! | Group | Operations |
//! |-------|------------|
//! | **Document** | set, get, mget, del, forget, type, resp, debug memory |
//! | **Number** | numincrby, nummultby |
//! | **String** | strappend, strlen |
//! | **Array** | arrappend, arrindex, arrinsert, arrlen, arrpop, arrtrim |
//! | **Object** | objkeys, objlen |
//!
//! ## Connections
//!
//! Everything runs over a [`Connection`]: one command at a time, or an
//! atomic [`Batch`] for transactions and composite queries.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod builder;
pub mod catalog;
mod command;
mod config;
mod convert;
mod error;
mod executor;
mod output;
mod query;
mod transaction;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::ReJson;
pub use builder::{build, build_with, BuiltCommand, Param};
pub use catalog::{lookup, lookup_wire, OperationDescriptor, OPERATIONS};
pub use command::Command;
pub use config::{ClientConfig, CONFIG_FILE_NAME};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use query::{CompositeQuery, Operator, QueryNode, DEL_OPERATOR, SET_OPERATOR};
pub use transaction::TransactionBatch;

// Re-export the value and wire types so users don't need the lower crates
pub use rejson_core::{JsonPath, JsonType, JsonValue};
pub use rejson_wire::{Batch, Connection, ConnectionError, Reply, WireCommand};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
