//! Error types for command execution.
//!
//! All errors from building, sending and decoding commands are represented
//! by the [`Error`] enum. These errors are:
//! - **Structured**: Each variant has named fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Verbatim**: Store error text is carried unchanged

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Store | `WrongType`, `Store`, `Write` | The store rejected or did not acknowledge a command |
/// | Reply | `Decode`, `NotFound` | Reply could not be turned into the expected result |
/// | Caller | `UnknownOperation`, `InvalidArgument`, `InvalidQuery` | Rejected before any I/O |
/// | System | `Transport`, `Config`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use rejson_executor::{Error, ReJson};
///
/// match db.num_incr_by("doc", ".name", 1) {
///     Ok(n) => println!("now {}", n),
///     Err(Error::WrongType { message }) => println!("not a number: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Store Errors ====================
    /// Value at the path is not of the kind the operation needs
    #[error("wrong type: {message}")]
    WrongType {
        /// Store error text
        message: String,
    },

    /// Any other error reply from the store
    #[error("store error: {message}")]
    Store {
        /// Store error text
        message: String,
    },

    /// A set-class operation was not acknowledged with `OK`
    #[error("write not acknowledged: {reply}")]
    Write {
        /// Reply received instead of `OK`
        reply: String,
    },

    // ==================== Reply Errors ====================
    /// Reply payload is not what the operation decodes
    #[error("decode error: {reason}")]
    Decode {
        /// What could not be decoded
        reason: String,
    },

    /// Nothing stored at the path where a value was required
    #[error("not found: {key} at {path}")]
    NotFound {
        /// Document key
        key: String,
        /// Path that held no value
        path: String,
    },

    // ==================== Caller Errors ====================
    /// Operation name is not in the command catalog
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// Requested operation name
        name: String,
    },

    /// Parameters do not fit the operation
    #[error("invalid argument for {operation}: {reason}")]
    InvalidArgument {
        /// Operation the arguments were given for
        operation: String,
        /// What is wrong with them
        reason: String,
    },

    /// Composite query is malformed
    #[error("invalid query: {reason}")]
    InvalidQuery {
        /// What is malformed
        reason: String,
    },

    // ==================== System Errors ====================
    /// Connection failure, surfaced unchanged
    #[error("transport error: {reason}")]
    Transport {
        /// Connection error text
        reason: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("config error: {reason}")]
    Config {
        /// What failed
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Details
        reason: String,
    },
}

impl Error {
    /// True for errors raised before anything was sent to the store.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownOperation { .. } | Error::InvalidArgument { .. } | Error::InvalidQuery { .. }
        )
    }
}
