//! JSON path type
//!
//! A `JsonPath` is the dot-delimited address of a fragment inside a
//! document. `.` doubles as the root marker and the separator, so `.`,
//! `.foo` and `.foo.bar.` are all valid. Paths built with [`JsonPath::child`]
//! keep a trailing separator.
//!
//! The command layer treats paths as opaque strings. [`JsonPath::segments`]
//! is the parser used by the reference store to resolve them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Parsed path component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object field name
    Key(String),
    /// Array index (negative counts from the end)
    Index(i64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, ".{}", k),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Error returned when a path cannot be parsed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// `[` without a matching `]`
    #[error("unterminated bracket in path '{path}'")]
    UnterminatedBracket {
        /// The offending path
        path: String,
    },
    /// Bracket contents are neither an integer nor a quoted key
    #[error("invalid index '{segment}' in path '{path}'")]
    InvalidIndex {
        /// The bracket contents
        segment: String,
        /// The offending path
        path: String,
    },
}

/// Dot-delimited path into a JSON document
///
/// # Examples
///
/// ```
/// use rejson_core::JsonPath;
///
/// let root = JsonPath::root();
/// assert_eq!(root.as_str(), ".");
///
/// let nested = root.child("a").child("b");
/// assert_eq!(nested.as_str(), ".a.b.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPath(String);

impl JsonPath {
    /// The document root, `.`
    pub fn root() -> Self {
        JsonPath(".".to_string())
    }

    /// Wrap a path string as-is.
    pub fn new(path: impl Into<String>) -> Self {
        JsonPath(path.into())
    }

    /// Path of a named field below this one: `self + segment + "."`.
    ///
    /// A separator is inserted first when `self` does not already end in one.
    pub fn child(&self, segment: &str) -> Self {
        let mut path = self.0.clone();
        if !path.ends_with('.') {
            path.push('.');
        }
        path.push_str(segment);
        path.push('.');
        JsonPath(path)
    }

    /// The path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the path addresses the whole document.
    pub fn is_root(&self) -> bool {
        matches!(self.0.as_str(), "." | "$" | "")
    }

    /// Parse the path into its components.
    ///
    /// A leading `$` is accepted. Empty components are skipped so both
    /// `.a.b` and `.a.b.` yield `[Key("a"), Key("b")]`.
    pub fn segments(&self) -> Result<Vec<PathSegment>, PathParseError> {
        let path = self.0.as_str();
        let body = path.strip_prefix('$').unwrap_or(path);
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = body.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if !current.is_empty() {
                        segments.push(PathSegment::Key(std::mem::take(&mut current)));
                    }
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(PathSegment::Key(std::mem::take(&mut current)));
                    }
                    let mut inner = String::new();
                    let mut closed = false;
                    let mut quote: Option<char> = None;
                    for c in chars.by_ref() {
                        match (quote, c) {
                            (Some(q), c) if c == q => quote = None,
                            (Some(_), c) => inner.push(c),
                            (None, '"') | (None, '\'') => {
                                quote = Some(c);
                                inner.push(c);
                            }
                            (None, ']') => {
                                closed = true;
                                break;
                            }
                            (None, c) => inner.push(c),
                        }
                    }
                    if !closed {
                        return Err(PathParseError::UnterminatedBracket {
                            path: path.to_string(),
                        });
                    }
                    segments.push(parse_bracket(&inner, path)?);
                }
                c => current.push(c),
            }
        }

        if !current.is_empty() {
            segments.push(PathSegment::Key(current));
        }
        Ok(segments)
    }
}

/// Bracket contents: `3`, `-1`, `"key"` or `'key'`.
///
/// The opening quote is kept in `inner` as a marker; the closing one is not.
fn parse_bracket(inner: &str, path: &str) -> Result<PathSegment, PathParseError> {
    let trimmed = inner.trim();
    if let Some(key) = trimmed
        .strip_prefix('"')
        .or_else(|| trimmed.strip_prefix('\''))
    {
        return Ok(PathSegment::Key(key.to_string()));
    }
    trimmed
        .parse::<i64>()
        .map(PathSegment::Index)
        .map_err(|_| PathParseError::InvalidIndex {
            segment: inner.to_string(),
            path: path.to_string(),
        })
}

impl Default for JsonPath {
    fn default() -> Self {
        JsonPath::root()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JsonPath {
    fn from(s: &str) -> Self {
        JsonPath(s.to_string())
    }
}

impl From<String> for JsonPath {
    fn from(s: String) -> Self {
        JsonPath(s)
    }
}

impl AsRef<str> for JsonPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
