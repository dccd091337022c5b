//! Transaction batches.
//!
//! A [`TransactionBatch`] queues built commands into an open store batch
//! and remembers each command's descriptor, so that after the batch runs
//! every reply is decoded with the rule of the command that produced it.

use rejson_wire::Batch;
use tracing::debug;

use crate::builder::BuiltCommand;
use crate::catalog::OperationDescriptor;
use crate::convert::decode_reply;
use crate::{Error, Output, Result};

/// An atomic batch of built commands.
///
/// Single-use: [`execute`](Self::execute) consumes it. Nothing reaches the
/// store until then.
pub struct TransactionBatch<B: Batch> {
    batch: B,
    descriptors: Vec<&'static OperationDescriptor>,
}

impl<B: Batch> TransactionBatch<B> {
    /// Wrap an open, empty store batch.
    pub fn new(batch: B) -> Self {
        Self {
            batch,
            descriptors: Vec::new(),
        }
    }

    /// Queue a command.
    pub fn push(&mut self, command: BuiltCommand) {
        self.descriptors.push(command.descriptor);
        self.batch.enqueue(command.wire);
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Run the batch.
    ///
    /// The outer `Result` fails only if the batch as a whole failed
    /// (transport error or abort). Otherwise there is one inner result per
    /// queued command, in queue order; a store error reply fails only its
    /// own entry.
    pub fn execute(self) -> Result<Vec<Result<Output>>> {
        let queued = self.descriptors.len();
        debug!(target: "rejson::executor", commands = queued, "Executing transaction");

        let replies = self.batch.execute()?;
        if replies.len() != queued {
            return Err(Error::Internal {
                reason: format!(
                    "batch returned {} replies for {} commands",
                    replies.len(),
                    queued
                ),
            });
        }

        Ok(self
            .descriptors
            .into_iter()
            .zip(replies)
            .map(|(descriptor, reply)| decode_reply(descriptor, reply))
            .collect())
    }
}

impl<B: Batch + std::fmt::Debug> std::fmt::Debug for TransactionBatch<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionBatch")
            .field("batch", &self.batch)
            .field("commands", &self.descriptors.len())
            .finish()
    }
}
