//! Whole-document and path operations.

use rejson_core::{JsonPath, JsonType, JsonValue};
use rejson_wire::{Connection, Reply};

use super::{path_of, unexpected, ReJson};
use crate::{Command, Output, Result};

impl<C: Connection> ReJson<C> {
    // =========================================================================
    // Document Operations
    // =========================================================================

    /// Set a JSON value at a path.
    ///
    /// A new document must be created at the root path `.`. Setting a
    /// field requires its parent to exist.
    ///
    /// # Returns
    ///
    /// `true` once the store acknowledged the write.
    pub fn set(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        value: impl Into<JsonValue>,
    ) -> Result<bool> {
        match self.executor.execute(Command::Set {
            key: key.to_string(),
            path: path_of(path),
            value: value.into(),
        })? {
            Output::Bool(ok) => Ok(ok),
            _ => Err(unexpected("Set")),
        }
    }

    /// Get the JSON value at a path.
    ///
    /// # Returns
    ///
    /// The decoded value, or `None` if the key or path is absent.
    pub fn get(&self, key: &str, path: impl Into<JsonPath>) -> Result<Option<JsonValue>> {
        match self.executor.execute(Command::Get {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Json(v) => Ok(Some(v)),
            Output::Nil => Ok(None),
            _ => Err(unexpected("Get")),
        }
    }

    /// Get the value at one path from several documents.
    ///
    /// Results are in the order of `keys`. At least two keys are required.
    pub fn mget<K: AsRef<str>>(
        &self,
        keys: &[K],
        path: impl Into<JsonPath>,
    ) -> Result<Vec<Option<JsonValue>>> {
        match self.executor.execute(Command::MGet {
            keys: keys.iter().map(|k| k.as_ref().to_string()).collect(),
            path: path_of(path),
        })? {
            Output::JsonList(values) => Ok(values),
            _ => Err(unexpected("MGet")),
        }
    }

    /// Delete the value at a path. The root path deletes the document.
    ///
    /// # Returns
    ///
    /// `true` if something was deleted.
    pub fn del(&self, key: &str, path: impl Into<JsonPath>) -> Result<bool> {
        match self.executor.execute(Command::Del {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Bool(deleted) => Ok(deleted),
            _ => Err(unexpected("Del")),
        }
    }

    /// Alias of [`del`](Self::del).
    pub fn forget(&self, key: &str, path: impl Into<JsonPath>) -> Result<bool> {
        match self.executor.execute(Command::Forget {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Bool(deleted) => Ok(deleted),
            _ => Err(unexpected("Forget")),
        }
    }

    /// Type of the value at a path, `None` if absent.
    pub fn type_of(&self, key: &str, path: impl Into<JsonPath>) -> Result<Option<JsonType>> {
        match self.executor.execute(Command::Type {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Type(t) => Ok(Some(t)),
            Output::Nil => Ok(None),
            _ => Err(unexpected("Type")),
        }
    }

    /// RESP rendering of the value at a path, as the store sent it.
    pub fn resp(&self, key: &str, path: impl Into<JsonPath>) -> Result<Reply> {
        match self.executor.execute(Command::Resp {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Resp(reply) => Ok(reply),
            _ => Err(unexpected("Resp")),
        }
    }
    /// Approximate size in bytes of the value at a path (`JSON.DEBUG MEMORY`).
    pub fn debug_memory(&self, key: &str, path: impl Into<JsonPath>) -> Result<i64> {
        match self.execute_required(Command::DebugMemory {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("DebugMemory")),
        }
    }
}
