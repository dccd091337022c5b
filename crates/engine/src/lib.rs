//! In-memory reference store for rejson
//!
//! This crate provides a document store that speaks the same `JSON.*`
//! command set as a RedisJSON server, over a process-local map:
//! - MemoryStore: documents keyed by string, guarded by one mutex
//! - MemoryBatch: atomic batch that holds the lock for its whole run
//! - StoreError: the store's error replies
//!
//! It implements [`rejson_wire::Connection`], so the command layer runs
//! against it unchanged. Tests, benches and the CLI use it in place of a
//! network store.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod handlers;
mod paths;
mod store;

pub use error::StoreError;
pub use store::{MemoryBatch, MemoryStore};
