//! Core types for rejson
//!
//! This crate defines the foundational types shared by the codec, the
//! command layer and the reference store:
//! - JsonValue: insertion-ordered JSON value (newtype over serde_json::Value)
//! - JsonType: the type tags a document store reports for a value
//! - JsonPath: dot-delimited path into a document (`.`, `.foo`, `.foo.bar.`)
//! - PathSegment: parsed path component (Key or Index)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;
pub mod path;

pub use json::{JsonType, JsonValue, UnknownJsonType};
pub use path::{JsonPath, PathParseError, PathSegment};
