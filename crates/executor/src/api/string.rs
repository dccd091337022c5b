//! String operations.

use rejson_core::JsonPath;
use rejson_wire::Connection;

use super::{path_of, unexpected, ReJson};
use crate::{Command, Output, Result};

impl<C: Connection> ReJson<C> {
    /// Append to the string at a path.
    ///
    /// # Returns
    ///
    /// The new length.
    pub fn str_append(&self, key: &str, path: impl Into<JsonPath>, value: &str) -> Result<i64> {
        match self.execute_required(Command::StrAppend {
            key: key.to_string(),
            path: path_of(path),
            value: value.to_string(),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("StrAppend")),
        }
    }

    /// Length of the string at a path.
    pub fn str_len(&self, key: &str, path: impl Into<JsonPath>) -> Result<i64> {
        match self.execute_required(Command::StrLen {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("StrLen")),
        }
    }
}
