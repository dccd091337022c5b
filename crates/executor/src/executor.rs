//! The Executor - single entry point to the document store.
//!
//! The Executor builds commands through the catalog, sends them over a
//! [`Connection`] and decodes replies into [`Output`]s.

use rejson_wire::Connection;
use tracing::debug;

use crate::builder::BuiltCommand;
use crate::convert::decode_reply;
use crate::transaction::TransactionBatch;
use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor is **stateless**: it holds a connection but no state of
/// its own. All state lives in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` whenever its connection is.
///
/// # Example
///
/// ```
/// use rejson_core::{JsonPath, JsonValue};
/// use rejson_engine::MemoryStore;
/// use rejson_executor::{Command, Executor, Output};
///
/// let executor = Executor::new(MemoryStore::new());
///
/// executor.execute(Command::Set {
///     key: "doc".into(),
///     path: JsonPath::root(),
///     value: JsonValue::from(42i64),
/// })?;
///
/// let results = executor.execute_atomic(vec![
///     Command::Get { key: "doc".into(), path: JsonPath::root() },
///     Command::Type { key: "doc".into(), path: JsonPath::root() },
/// ])?;
/// assert_eq!(results.len(), 2);
/// # Ok::<(), rejson_executor::Error>(())
/// ```
#[derive(Debug)]
pub struct Executor<C> {
    connection: C,
}

impl<C: Connection> Executor<C> {
    /// Create a new executor over a connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Consume the executor, returning its connection.
    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.execute_built(cmd.build()?)
    }

    /// Execute an already built command.
    pub fn execute_built(&self, built: BuiltCommand) -> Result<Output> {
        debug!(target: "rejson::executor", command = %built.wire, "Executing command");
        let reply = self.connection.invoke(&built.wire)?;
        decode_reply(built.descriptor, reply)
    }

    /// Execute commands as one atomic batch.
    ///
    /// Every command is built before the batch is opened, so a command
    /// that cannot be built fails the call without sending anything. An
    /// empty list returns an empty result without touching the store.
    pub fn execute_atomic(&self, cmds: Vec<Command>) -> Result<Vec<Result<Output>>> {
        let built = cmds
            .into_iter()
            .map(Command::build)
            .collect::<Result<Vec<_>>>()?;
        self.execute_built_atomic(built)
    }

    /// Execute already built commands as one atomic batch.
    pub fn execute_built_atomic(&self, built: Vec<BuiltCommand>) -> Result<Vec<Result<Output>>> {
        if built.is_empty() {
            return Ok(Vec::new());
        }
        let mut tx = self.transaction();
        for command in built {
            tx.push(command);
        }
        tx.execute()
    }

    /// Open an empty transaction batch on the connection.
    pub fn transaction(&self) -> TransactionBatch<C::Batch<'_>> {
        TransactionBatch::new(self.connection.open_batch())
    }
}
