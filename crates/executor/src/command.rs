//! Command enum defining every document operation.
//!
//! Commands are the typed form of the catalog. Each variant carries
//! everything needed to build its wire command. Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON (a compiled query plan
//!   is a `Vec<Command>`)
//! - **Pure data**: Building one performs no I/O

use rejson_core::{JsonPath, JsonValue};
use serde::{Deserialize, Serialize};

use crate::builder::{build, BuiltCommand, Param};
use crate::{Error, Result};

/// A self-contained, serializable document operation.
///
/// # Command Categories
///
/// | Category | Commands |
/// |----------|----------|
/// | Document | `Set`, `Get`, `MGet`, `Del`, `Forget`, `Type`, `Resp`, `DebugMemory` |
/// | Number | `NumIncrBy`, `NumMultBy` |
/// | String | `StrAppend`, `StrLen` |
/// | Array | `ArrAppend`, `ArrIndex`, `ArrInsert`, `ArrLen`, `ArrPop`, `ArrTrim` |
/// | Object | `ObjKeys`, `ObjLen` |
///
/// # Example
///
/// ```
/// use rejson_core::{JsonPath, JsonValue};
/// use rejson_executor::Command;
///
/// let cmd = Command::Set {
///     key: "doc".into(),
///     path: JsonPath::root(),
///     value: JsonValue::from(42i64),
/// };
/// let built = cmd.build().unwrap();
/// assert_eq!(built.wire.args, vec!["doc", ".", "42"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Document ====================
    /// Set a value at a path.
    /// Returns: `Output::Bool(true)`
    Set {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Value to write
        value: JsonValue,
    },

    /// Get the value at a path.
    /// Returns: `Output::Json` or `Output::Nil`
    Get {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Get the value at one path from several documents.
    /// Returns: `Output::JsonList`, one entry per key in the given order
    MGet {
        /// Document keys, in reply order
        keys: Vec<String>,
        /// Path into the document
        path: JsonPath,
    },

    /// Delete the value at a path.
    /// Returns: `Output::Bool`
    Del {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Alias of `Del`.
    /// Returns: `Output::Bool`
    Forget {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Type tag of the value at a path.
    /// Returns: `Output::Type` or `Output::Nil`
    Type {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// RESP rendering of the value at a path.
    /// Returns: `Output::Resp`
    Resp {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Approximate size in bytes of the value at a path (`JSON.DEBUG MEMORY`).
    /// Returns: `Output::Int` or `Output::Nil`
    DebugMemory {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    // ==================== Number ====================
    /// Add to the number at a path.
    /// Returns: `Output::Number`
    NumIncrBy {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Numeric operand
        by: serde_json::Number,
    },

    /// Multiply the number at a path.
    /// Returns: `Output::Number`
    NumMultBy {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Numeric operand
        by: serde_json::Number,
    },

    // ==================== String ====================
    /// Append to the string at a path.
    /// Returns: `Output::Int` (new length)
    StrAppend {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Suffix to append
        value: String,
    },

    /// Length of the string at a path.
    /// Returns: `Output::Int` or `Output::Nil`
    StrLen {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    // ==================== Array ====================
    /// Append values to the array at a path.
    /// Returns: `Output::Int` (new length)
    ArrAppend {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Values, each encoded separately, in order
        values: Vec<JsonValue>,
    },

    /// Index of the first element equal to a scalar.
    /// Returns: `Output::Int` (-1 if absent)
    ArrIndex {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Scalar to search for
        value: JsonValue,
    },

    /// Insert values before an index.
    /// Returns: `Output::Int` (new length)
    ArrInsert {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Array index, negative counts from the end
        index: i64,
        /// Values, each encoded separately, in order
        values: Vec<JsonValue>,
    },

    /// Length of the array at a path.
    /// Returns: `Output::Int` or `Output::Nil`
    ArrLen {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Remove and return the element at an index.
    /// Returns: `Output::Json` or `Output::Nil` (empty array)
    ArrPop {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// Array index, negative counts from the end
        index: i64,
    },

    /// Keep only `start..=stop`.
    /// Returns: `Output::Int` (new length)
    ArrTrim {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
        /// First index kept
        start: i64,
        /// Last index kept (inclusive)
        stop: i64,
    },

    // ==================== Object ====================
    /// Key names of the object at a path, in order.
    /// Returns: `Output::Keys` or `Output::Nil`
    ObjKeys {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },

    /// Number of keys of the object at a path.
    /// Returns: `Output::Int` or `Output::Nil`
    ObjLen {
        /// Document key
        key: String,
        /// Path into the document
        path: JsonPath,
    },
}

impl Command {
    /// Catalog name of the operation.
    pub fn operation(&self) -> &'static str {
        match self {
            Command::Set { .. } => "set",
            Command::Get { .. } => "get",
            Command::MGet { .. } => "mget",
            Command::Del { .. } => "del",
            Command::Forget { .. } => "forget",
            Command::Type { .. } => "type",
            Command::Resp { .. } => "resp",
            Command::DebugMemory { .. } => "debug",
            Command::NumIncrBy { .. } => "numincrby",
            Command::NumMultBy { .. } => "nummultby",
            Command::StrAppend { .. } => "strappend",
            Command::StrLen { .. } => "strlen",
            Command::ArrAppend { .. } => "arrappend",
            Command::ArrIndex { .. } => "arrindex",
            Command::ArrInsert { .. } => "arrinsert",
            Command::ArrLen { .. } => "arrlen",
            Command::ArrPop { .. } => "arrpop",
            Command::ArrTrim { .. } => "arrtrim",
            Command::ObjKeys { .. } => "objkeys",
            Command::ObjLen { .. } => "objlen",
        }
    }

    /// Build the wire command through the catalog.
    pub fn build(self) -> Result<BuiltCommand> {
        let operation = self.operation();
        match self {
            Command::Set { key, path, value } => build(&key, &path, operation, vec![value.into()]),
            Command::MGet { keys, path } => {
                let mut keys = keys.into_iter();
                let first = keys.next().ok_or_else(|| Error::InvalidArgument {
                    operation: operation.to_string(),
                    reason: "at least two keys are required".into(),
                })?;
                build(&first, &path, operation, keys.map(Param::Key).collect())
            }
            Command::Get { key, path }
            | Command::Del { key, path }
            | Command::Forget { key, path }
            | Command::Type { key, path }
            | Command::Resp { key, path }
            | Command::DebugMemory { key, path }
            | Command::StrLen { key, path }
            | Command::ArrLen { key, path }
            | Command::ObjKeys { key, path }
            | Command::ObjLen { key, path } => build(&key, &path, operation, vec![]),
            Command::NumIncrBy { key, path, by } | Command::NumMultBy { key, path, by } => {
                build(&key, &path, operation, vec![by.into()])
            }
            Command::StrAppend { key, path, value } => {
                build(&key, &path, operation, vec![JsonValue::from(value).into()])
            }
            Command::ArrAppend { key, path, values } => build(
                &key,
                &path,
                operation,
                values.into_iter().map(Param::Json).collect(),
            ),
            Command::ArrIndex { key, path, value } => build(&key, &path, operation, vec![value.into()]),
            Command::ArrInsert {
                key,
                path,
                index,
                values,
            } => {
                let mut params = Vec::with_capacity(values.len() + 1);
                params.push(index.into());
                params.extend(values.into_iter().map(Param::Json));
                build(&key, &path, operation, params)
            }
            Command::ArrPop { key, path, index } => build(&key, &path, operation, vec![index.into()]),
            Command::ArrTrim {
                key,
                path,
                start,
                stop,
            } => build(&key, &path, operation, vec![start.into(), stop.into()]),
        }
    }
}
