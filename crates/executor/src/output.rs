//! Output enum for command execution results.
//!
//! Every command produces one output type, fixed by its catalog entry's
//! result rule. Operations that read may also produce `Nil` when nothing
//! is stored at the path.

use rejson_core::{JsonType, JsonValue};
use rejson_wire::Reply;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// use rejson_executor::{Command, Output};
///
/// match executor.execute(Command::Get { key, path })? {
///     Output::Json(v) => println!("Found: {}", v),
///     Output::Nil => println!("Not found"),
///     _ => unreachable!("Get returns Json or Nil"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Nothing stored at the path
    Nil,

    /// Acknowledgement or removal flag
    Bool(bool),

    /// Decoded JSON value
    Json(JsonValue),

    /// One decoded value per requested key, `None` where absent
    JsonList(Vec<Option<JsonValue>>),

    /// Integer result (lengths, counts, indices)
    Int(i64),

    /// Numeric result of increment/multiply, as the store computed it
    Number(serde_json::Number),

    /// Object key names in order
    Keys(Vec<String>),

    /// Type tag
    Type(JsonType),

    /// Reply passed through unchanged
    Resp(Reply),
}

impl Output {
    /// True for `Output::Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Output::Nil)
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Nil => "Nil",
            Output::Bool(_) => "Bool",
            Output::Json(_) => "Json",
            Output::JsonList(_) => "JsonList",
            Output::Int(_) => "Int",
            Output::Number(_) => "Number",
            Output::Keys(_) => "Keys",
            Output::Type(_) => "Type",
            Output::Resp(_) => "Resp",
        }
    }
}
