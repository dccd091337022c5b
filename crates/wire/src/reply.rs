//! Store replies

use serde::{Deserialize, Serialize};

/// A reply from the document store
///
/// Mirrors the reply kinds a Redis-protocol store answers with. An error
/// reply is a value here, not a `Result::Err`: inside a batch each command
/// gets its own reply and one failing command does not fail its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Reply {
    /// No value (missing key or path)
    Nil,
    /// Simple status text, e.g. `OK` or a type tag
    Status(String),
    /// Integer reply
    Integer(i64),
    /// Bulk string reply (JSON text, numerals)
    Bulk(String),
    /// Array of replies
    Array(Vec<Reply>),
    /// Error reply with the store's message
    Error(String),
}

impl Reply {
    /// Shorthand for the `OK` status.
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    /// True for `Reply::Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }

    /// True for `Reply::Error`.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Text of a status or bulk reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Status(s) | Reply::Bulk(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the reply kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Nil => "nil",
            Reply::Status(_) => "status",
            Reply::Integer(_) => "integer",
            Reply::Bulk(_) => "bulk",
            Reply::Array(_) => "array",
            Reply::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(Reply::ok().as_text(), Some("OK"));
        assert_eq!(Reply::Bulk("1".into()).as_text(), Some("1"));
        assert_eq!(Reply::Integer(1).as_text(), None);
    }

    #[test]
    fn test_serialization_tagged() {
        let json = serde_json::to_string(&Reply::Integer(3)).unwrap();
        assert_eq!(json, r#"{"kind":"integer","value":3}"#);
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Reply::Integer(3));
    }
}
