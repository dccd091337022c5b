//! MemoryStore: in-process document store
//!
//! All documents live in one `HashMap` behind a `parking_lot::Mutex`.
//! A single command takes the lock for its own duration; a batch takes it
//! once and runs every queued command before releasing it, so nothing
//! interleaves with a batch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rejson_core::JsonValue;
use rejson_wire::{Batch, Connection, ConnectionError, Reply, WireCommand};
use tracing::debug;

use crate::handlers::{self, Documents};

/// In-memory JSON document store
///
/// # Example
///
/// ```
/// use rejson_engine::MemoryStore;
/// use rejson_wire::{Connection, Reply, WireCommand};
///
/// let store = MemoryStore::new();
/// let set = WireCommand::new("JSON.SET").arg("doc").arg(".").arg(r#"{"a":1}"#);
/// assert_eq!(store.invoke(&set).unwrap(), Reply::ok());
///
/// let get = WireCommand::new("JSON.GET").arg("doc").arg(".a");
/// assert_eq!(store.invoke(&get).unwrap(), Reply::Bulk("1".into()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<Documents>,
    closed: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn key_count(&self) -> usize {
        self.docs.lock().len()
    }

    /// Copy of the document stored under `key`.
    pub fn document(&self, key: &str) -> Option<JsonValue> {
        self.docs.lock().get(key).cloned()
    }

    /// Remove every document.
    pub fn flush_all(&self) {
        let mut docs = self.docs.lock();
        debug!(target: "rejson::engine", removed = docs.len(), "Flushed store");
        docs.clear();
    }

    /// Stop accepting commands.
    ///
    /// Later calls fail with [`ConnectionError::Closed`], the same way a
    /// dropped network connection would.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// True after [`MemoryStore::close`].
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), ConnectionError> {
        if self.is_closed() {
            Err(ConnectionError::Closed)
        } else {
            Ok(())
        }
    }
}

impl From<HashMap<String, JsonValue>> for MemoryStore {
    fn from(docs: HashMap<String, JsonValue>) -> Self {
        MemoryStore {
            docs: Mutex::new(docs),
            closed: AtomicBool::new(false),
        }
    }
}

impl Connection for MemoryStore {
    type Batch<'a> = MemoryBatch<'a>;

    fn invoke(&self, command: &WireCommand) -> Result<Reply, ConnectionError> {
        self.ensure_open()?;
        let mut docs = self.docs.lock();
        Ok(handlers::dispatch(&mut docs, command))
    }

    fn open_batch(&self) -> MemoryBatch<'_> {
        MemoryBatch {
            store: self,
            queued: Vec::new(),
        }
    }
}

/// Atomic batch on a [`MemoryStore`]
#[derive(Debug)]
pub struct MemoryBatch<'a> {
    store: &'a MemoryStore,
    queued: Vec<WireCommand>,
}

impl Batch for MemoryBatch<'_> {
    fn enqueue(&mut self, command: WireCommand) {
        self.queued.push(command);
    }

    fn len(&self) -> usize {
        self.queued.len()
    }

    fn execute(self) -> Result<Vec<Reply>, ConnectionError> {
        self.store.ensure_open()?;
        let mut docs = self.store.docs.lock();
        debug!(target: "rejson::engine", commands = self.queued.len(), "Executing batch");
        Ok(self
            .queued
            .iter()
            .map(|command| handlers::dispatch(&mut docs, command))
            .collect())
    }
}
