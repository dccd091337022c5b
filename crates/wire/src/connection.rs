//! Connection contract
//!
//! The command layer needs exactly two things from a store connection:
//! issue one command and get its reply, or open an atomic batch, queue
//! commands into it and execute it for one reply per command in issuance
//! order. Connection management (pooling, auth, reconnects) lives behind
//! these traits.

use crate::{Reply, WireCommand};
use thiserror::Error;

/// Transport-level failure
///
/// Store error replies are not connection errors; they arrive as
/// [`Reply::Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The connection is closed or was never established
    #[error("connection closed")]
    Closed,

    /// I/O failure talking to the store
    #[error("I/O error: {0}")]
    Io(String),

    /// The store aborted the whole batch
    #[error("batch aborted: {0}")]
    Aborted(String),

    /// Reply could not be read
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// An open atomic batch
///
/// Commands are queued client-side and run together by [`Batch::execute`].
/// Consuming `self` makes a batch single-use.
pub trait Batch {
    /// Queue a command.
    fn enqueue(&mut self, command: WireCommand);

    /// Number of queued commands.
    fn len(&self) -> usize;

    /// True when nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every queued command atomically.
    ///
    /// Returns one reply per queued command, in enqueue order.
    fn execute(self) -> Result<Vec<Reply>, ConnectionError>;
}

/// A connection to a JSON document store
pub trait Connection {
    /// Batch handle type for this connection
    type Batch<'a>: Batch
    where
        Self: 'a;

    /// Issue one command and wait for its reply.
    fn invoke(&self, command: &WireCommand) -> Result<Reply, ConnectionError>;

    /// Open an empty atomic batch.
    fn open_batch(&self) -> Self::Batch<'_>;
}
