//! Composite queries.

use rejson_core::JsonValue;
use rejson_wire::Connection;
use tracing::debug;

use super::ReJson;
use crate::{CompositeQuery, Output, Result};

impl<C: Connection> ReJson<C> {
    /// Apply a composite query to one document, atomically.
    ///
    /// The query is compiled and every command built before anything is
    /// sent; a malformed query fails without touching the store. The
    /// commands then run as one batch.
    ///
    /// # Returns
    ///
    /// One result per compiled command, in compile order. A store error
    /// fails only its own entry; a transport failure fails the call.
    ///
    /// # Example
    ///
    /// ```
    /// use rejson_engine::MemoryStore;
    /// use rejson_executor::{Output, ReJson};
    /// use serde_json::json;
    ///
    /// let db = ReJson::new(MemoryStore::new());
    /// db.set("user", ".", json!({"name": "Al", "address": {}}))?;
    ///
    /// let results = db.apply_query("user", json!({"name": "Alice", "address": {"zip": 2000}}))?;
    /// assert_eq!(results, vec![Ok(Output::Bool(true)), Ok(Output::Bool(true))]);
    /// assert_eq!(db.get("user", ".address.zip")?, Some(json!(2000).into()));
    /// # Ok::<(), rejson_executor::Error>(())
    /// ```
    pub fn apply_query(
        &self,
        key: &str,
        query: impl Into<JsonValue>,
    ) -> Result<Vec<Result<Output>>> {
        let plan = CompositeQuery::parse(query.into())?.compile(key);
        debug!(target: "rejson::executor", key, commands = plan.len(), "Applying composite query");
        self.executor.execute_atomic(plan)
    }
}
