//! A connection that records what it is sent.
//!
//! Wraps a [`MemoryStore`] for real replies, or answers every batch with a
//! scripted outcome.

use parking_lot::Mutex;
use rejson_engine::{MemoryBatch, MemoryStore};
use rejson_wire::{Batch, Connection, ConnectionError, Reply, WireCommand};

/// How batches are answered
#[derive(Debug, Clone)]
pub enum Mode {
    /// Run against the wrapped store
    Store,
    /// Fail every batch and command
    Fail(ConnectionError),
    /// Return these replies for every batch, whatever was queued
    Replies(Vec<Reply>),
}

#[derive(Debug)]
pub struct RecordingConnection {
    pub store: MemoryStore,
    mode: Mode,
    commands: Mutex<Vec<WireCommand>>,
    batches: Mutex<Vec<Vec<WireCommand>>>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self::with_mode(Mode::Store)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            store: MemoryStore::new(),
            mode,
            commands: Mutex::new(Vec::new()),
            batches: Mutex::new(Vec::new()),
        }
    }

    /// Commands sent one at a time.
    pub fn commands(&self) -> Vec<WireCommand> {
        self.commands.lock().clone()
    }

    /// Executed batches, each with its commands in queue order.
    pub fn batches(&self) -> Vec<Vec<WireCommand>> {
        self.batches.lock().clone()
    }
}

pub struct RecordingBatch<'a> {
    conn: &'a RecordingConnection,
    inner: MemoryBatch<'a>,
    queued: Vec<WireCommand>,
}

impl Batch for RecordingBatch<'_> {
    fn enqueue(&mut self, command: WireCommand) {
        self.queued.push(command.clone());
        self.inner.enqueue(command);
    }

    fn len(&self) -> usize {
        self.queued.len()
    }

    fn execute(self) -> Result<Vec<Reply>, ConnectionError> {
        self.conn.batches.lock().push(self.queued);
        match &self.conn.mode {
            Mode::Store => self.inner.execute(),
            Mode::Fail(err) => Err(err.clone()),
            Mode::Replies(replies) => Ok(replies.clone()),
        }
    }
}

impl Connection for RecordingConnection {
    type Batch<'a> = RecordingBatch<'a>;

    fn invoke(&self, command: &WireCommand) -> Result<Reply, ConnectionError> {
        self.commands.lock().push(command.clone());
        match &self.mode {
            Mode::Fail(err) => Err(err.clone()),
            _ => self.store.invoke(command),
        }
    }

    fn open_batch(&self) -> Self::Batch<'_> {
        RecordingBatch {
            conn: self,
            inner: self.store.open_batch(),
            queued: Vec::new(),
        }
    }
}
