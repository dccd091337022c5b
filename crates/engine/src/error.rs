//! Store error replies
//!
//! Every variant renders to the text the store sends back in an error
//! reply. Type mismatches on the target value say "wrong type" so the
//! client can tell them apart from other failures.

use rejson_core::PathParseError;
use thiserror::Error;

/// Errors raised while executing a `JSON.*` command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Command name not in the `JSON.*` set
    #[error("ERR unknown command '{0}'")]
    UnknownCommand(String),

    /// Subcommand not supported by the command
    #[error("ERR unknown subcommand '{subcommand}' for '{command}'")]
    UnknownSubcommand {
        /// Command name, e.g. "JSON.DEBUG"
        command: String,
        /// Subcommand as given
        subcommand: String,
    },

    /// Too few or too many arguments
    #[error("ERR wrong number of arguments for '{0}' command")]
    WrongArity(String),

    /// Value at the path has the wrong type for the command
    #[error("ERR wrong type of path value - expected {expected} but found {found}")]
    WrongType {
        /// What the command needs, e.g. "a number"
        expected: &'static str,
        /// Type tag of the value found
        found: &'static str,
    },

    /// SET on a missing key with a non-root path
    #[error("ERR new objects must be created at the root")]
    NewObjectNotAtRoot,

    /// SET below a container that does not exist
    #[error("ERR missing key at non-terminal path level")]
    MissingParent,

    /// Mutation on a missing key
    #[error("ERR could not perform this operation on a key that doesn't exist")]
    NoSuchKey,

    /// Mutation on a missing path
    #[error("ERR path '{0}' does not exist")]
    NoSuchPath(String),

    /// Array index outside the array
    #[error("ERR index out of range")]
    IndexOutOfRange,

    /// Argument is not valid JSON
    #[error("ERR invalid JSON argument: {0}")]
    InvalidJson(String),

    /// Argument has the wrong JSON kind
    #[error("ERR expected {0} argument")]
    UnexpectedArgument(&'static str),

    /// Argument is not an integer
    #[error("ERR value is not an integer or out of range")]
    NotAnInteger,

    /// Argument is not a number
    #[error("ERR value is not a number")]
    NotANumber,

    /// Arithmetic produced NaN or an infinity
    #[error("ERR result is not a finite number")]
    NonFinite,

    /// Path text could not be parsed
    #[error("ERR invalid path: {0}")]
    InvalidPath(#[from] PathParseError),
}
