//! Array operations.
//!
//! Indices may be negative, counting from the end of the array.

use rejson_core::{JsonPath, JsonValue};
use rejson_wire::Connection;

use super::{path_of, unexpected, ReJson};
use crate::{Command, Output, Result};

impl<C: Connection> ReJson<C> {
    /// Append values to the array at a path.
    ///
    /// # Returns
    ///
    /// The new length.
    pub fn arr_append<V: Into<JsonValue>>(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<i64> {
        match self.execute_required(Command::ArrAppend {
            key: key.to_string(),
            path: path_of(path),
            values: values.into_iter().map(Into::into).collect(),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ArrAppend")),
        }
    }

    /// Index of the first element equal to a scalar, or -1.
    pub fn arr_index(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        value: impl Into<JsonValue>,
    ) -> Result<i64> {
        match self.execute_required(Command::ArrIndex {
            key: key.to_string(),
            path: path_of(path),
            value: value.into(),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ArrIndex")),
        }
    }

    /// Insert values before `index`.
    ///
    /// # Returns
    ///
    /// The new length.
    pub fn arr_insert<V: Into<JsonValue>>(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        index: i64,
        values: impl IntoIterator<Item = V>,
    ) -> Result<i64> {
        match self.execute_required(Command::ArrInsert {
            key: key.to_string(),
            path: path_of(path),
            index,
            values: values.into_iter().map(Into::into).collect(),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ArrInsert")),
        }
    }

    /// Number of elements in the array at a path.
    pub fn arr_len(&self, key: &str, path: impl Into<JsonPath>) -> Result<i64> {
        match self.execute_required(Command::ArrLen {
            key: key.to_string(),
            path: path_of(path),
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ArrLen")),
        }
    }

    /// Remove and return the element at `index` (`-1` for the last one).
    ///
    /// # Returns
    ///
    /// The removed element, or `None` if the array was empty.
    pub fn arr_pop(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        index: i64,
    ) -> Result<Option<JsonValue>> {
        match self.executor.execute(Command::ArrPop {
            key: key.to_string(),
            path: path_of(path),
            index,
        })? {
            Output::Json(v) => Ok(Some(v)),
            Output::Nil => Ok(None),
            _ => Err(unexpected("ArrPop")),
        }
    }

    /// Keep only the elements in `start..=stop`.
    ///
    /// # Returns
    ///
    /// The new length.
    pub fn arr_trim(
        &self,
        key: &str,
        path: impl Into<JsonPath>,
        start: i64,
        stop: i64,
    ) -> Result<i64> {
        match self.execute_required(Command::ArrTrim {
            key: key.to_string(),
            path: path_of(path),
            start,
            stop,
        })? {
            Output::Int(n) => Ok(n),
            _ => Err(unexpected("ArrTrim")),
        }
    }
}
