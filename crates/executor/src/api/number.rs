//! Numeric operations.
//!
//! The result is the number the store computed, parsed from its reply.
//! Integers stay integers; nothing is recomputed client-side.

use rejson_core::{JsonPath, JsonValue};
use rejson_wire::Connection;
use serde_json::{Number, Value};

use super::{path_of, unexpected, ReJson};
use crate::{Command, Error, Output, Result};

fn number_arg(operation: &str, by: JsonValue) -> Result<Number> {
    match by.into_inner() {
        Value::Number(n) => Ok(n),
        other => Err(Error::InvalidArgument {
            operation: operation.to_string(),
            reason: format!("expected a number, got {}", other),
        }),
    }
}

impl<C: Connection> ReJson<C> {
    /// Add `by` to the number at a path.
    ///
    /// Fails with `Error::WrongType` if the value is not a number.
    pub fn num_incr_by(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        by: impl Into<JsonValue>,
    ) -> Result<Number> {
        let by = number_arg("numincrby", by.into())?;
        match self.execute_required(Command::NumIncrBy {
            key: key.to_string(),
            path: path_of(path),
            by,
        })? {
            Output::Number(n) => Ok(n),
            _ => Err(unexpected("NumIncrBy")),
        }
    }

    /// Multiply the number at a path by `by`.
    pub fn num_mult_by(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        by: impl Into<JsonValue>,
    ) -> Result<Number> {
        let by = number_arg("nummultby", by.into())?;
        match self.execute_required(Command::NumMultBy {
            key: key.to_string(),
            path: path_of(path),
            by,
        })? {
            Output::Number(n) => Ok(n),
            _ => Err(unexpected("NumMultBy")),
        }
    }
}
