//! Object operations.

use rejson_core::JsonPath;
use rejson_wire::Connection;

use super::{path_of, unexpected, ReJson};
use crate::{Command, Output, Result};

impl<C: Connection> ReJson<C> {
    /// Key names of the object at a path, in insertion order.
    ///
    /// Fails with `Error::WrongType` if the value is not an object.
    pub fn obj_keys(&self, key: &str, path: impl Into<JsonPath>) -> Result<Vec<String>> {
        match self.execute_required(Command::ObjKeys {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Keys(keys) => Ok(keys),
            _ => Err(unexpected("ObjKeys")),
        }
    }

    /// Number of keys of the object at a path.
    pub fn obj_len(&self, key: &str, path: impl Into<JsonPath>) -> Result<i64> {
        match self.execute_required(Command::ObjLen {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ObjLen")),
        }
    }
}
