//! Session wrapper with target context.
//!
//! Holds the `ReJson` handle the session runs against and the resolved
//! client configuration. The shell only has the in-process store, so a
//! configuration naming any other target is refused up front.

use rejson_engine::MemoryStore;
use rejson_executor::{BuiltCommand, ClientConfig, Error, JsonValue, Output, ReJson, Result};

/// Wraps the document handle and tracks the target.
pub struct SessionState {
    db: ReJson<MemoryStore>,
    config: ClientConfig,
}

impl SessionState {
    /// Create a session over the in-process store.
    ///
    /// Fails with `Error::Config` unless `config` names the default target
    /// with no password: there is no network transport to reach anything else.
    pub fn new(config: ClientConfig) -> Result<Self> {
        ensure_in_process(&config)?;
        Ok(Self {
            db: ReJson::new(MemoryStore::new()),
            config,
        })
    }

    /// Execute one built command.
    pub fn execute(&self, built: BuiltCommand) -> Result<Output> {
        self.db.executor().execute_built(built)
    }

    /// Apply a composite query to one document.
    pub fn apply_query(&self, key: &str, query: JsonValue) -> Result<Vec<Result<Output>>> {
        self.db.apply_query(key, query)
    }

    /// Resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// REPL prompt. Names the in-process store the commands run against.
    pub fn prompt(&self) -> String {
        "memory> ".to_string()
    }
}

fn ensure_in_process(config: &ClientConfig) -> Result<()> {
    let default = ClientConfig::default();
    let same_target =
        config.host == default.host && config.port == default.port && config.db == default.db;
    if same_target && config.password.is_none() {
        Ok(())
    } else {
        Err(Error::Config {
            reason: format!(
                "cannot reach {}[{}]: no network transport, only the in-process store is available",
                config.address(),
                config.db
            ),
        })
    }
}
