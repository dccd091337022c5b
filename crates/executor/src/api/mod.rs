//! High-level typed wrapper for the Executor.
//!
//! The [`ReJson`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls,
//! one per catalog operation, plus [`ReJson::apply_query`] for composite
//! queries.
//!
//! Paths are anything convertible into a [`JsonPath`]: `"."`, `".a.b"`,
//! a `String` or a `JsonPath`.
//!
//! # Example
//!
//! ```
//! use rejson_engine::MemoryStore;
//! use rejson_executor::ReJson;
//! use serde_json::json;
//!
//! let db = ReJson::new(MemoryStore::new());
//!
//! db.set("doc", ".", json!({"b": [1, 2, 3]}))?;
//! assert_eq!(db.arr_append("doc", ".b", vec![json!(4), json!(5)])?, 5);
//! assert_eq!(db.get("doc", ".b")?, Some(json!([1, 2, 3, 4, 5]).into()));
//! # Ok::<(), rejson_executor::Error>(())
//! ```

mod array;
mod document;
mod number;
mod object;
mod query;
mod string;

use rejson_core::JsonPath;
use rejson_wire::Connection;

use crate::{Command, Error, Executor, Output, Result};

/// High-level typed wrapper for document operations.
///
/// `ReJson` holds no state besides its executor; it is `Send + Sync`
/// whenever the connection is.
#[derive(Debug)]
pub struct ReJson<C> {
    executor: Executor<C>,
}

impl<C: Connection> ReJson<C> {
    /// Wrap a connection.
    pub fn new(connection: C) -> Self {
        Self {
            executor: Executor::new(connection),
        }
    }

    /// Wrap an existing executor.
    pub fn from_executor(executor: Executor<C>) -> Self {
        Self { executor }
    }

    /// Get the underlying executor.
    pub fn executor(&self) -> &Executor<C> {
        &self.executor
    }

    /// Get the underlying connection.
    pub fn connection(&self) -> &C {
        self.executor.connection()
    }

    /// Execute a command, failing with `NotFound` on a nil result.
    fn execute_required(&self, cmd: Command) -> Result<Output> {
        let (key, path) = match &cmd {
            Command::MGet { keys, path } => (keys.join(","), path.to_string()),
            Command::Set { key, path, .. }
            | Command::Get { key, path }
            | Command::Del { key, path }
            | Command::Forget { key, path }
            | Command::Type { key, path }
            | Command::Resp { key, path }
            | Command::DebugMemory { key, path }
            | Command::NumIncrBy { key, path, .. }
            | Command::NumMultBy { key, path, .. }
            | Command::StrAppend { key, path, .. }
            | Command::StrLen { key, path }
            | Command::ArrAppend { key, path, .. }
            | Command::ArrIndex { key, path, .. }
            | Command::ArrInsert { key, path, .. }
            | Command::ArrLen { key, path }
            | Command::ArrPop { key, path, .. }
            | Command::ArrTrim { key, path, .. }
            | Command::ObjKeys { key, path }
            | Command::ObjLen { key, path } => (key.clone(), path.to_string()),
        };
        match self.executor.execute(cmd)? {
            Output::Nil => Err(Error::NotFound { key, path }),
            output => Ok(output),
        }
    }
}

fn unexpected(operation: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", operation),
    }
}

fn path_of(path: impl Into<JsonPath>) -> JsonPath {
    path.into()
}
