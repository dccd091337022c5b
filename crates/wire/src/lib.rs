//! Wire layer for rejson
//!
//! This crate sits between the command layer and a document store
//! connection. It provides:
//!
//! - the JSON argument codec (`encode_json`, `decode_json`, `decode_number`)
//! - [`WireCommand`]: a named store command with ordered string arguments
//! - [`Reply`]: the reply shapes a store answers with
//! - [`Connection`] / [`Batch`]: the two capabilities consumed from a store
//!   connection (issue one command, run an atomic batch)
//!
//! ## Wire Encoding Rules
//!
//! | Value Type | Argument Text |
//! |------------|---------------|
//! | Null | `null` |
//! | Bool | `true`/`false` |
//! | Integer | `42` |
//! | Number | `3.5` |
//! | String | `"..."` (quoted, escaped) |
//! | Array | `[...]` |
//! | Object | `{...}` (insertion order kept) |
//!
//! ## Examples
//!
//! ```
//! use rejson_wire::{encode_json, decode_json};
//! use rejson_core::JsonValue;
//!
//! let value = JsonValue::from("hello");
//! let json = encode_json(&value);
//! assert_eq!(json, r#""hello""#);
//!
//! let decoded = decode_json(&json).unwrap();
//! assert_eq!(decoded, value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod connection;
pub mod json;
pub mod reply;

pub use command::WireCommand;
pub use connection::{Batch, Connection, ConnectionError};
pub use json::{decode_json, decode_number, encode_json, DecodeError};
pub use reply::Reply;
