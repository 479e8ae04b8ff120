//! Durable key-value storage for extension state.
//!
//! The MRU tracker is written against the [`KvStore`] capability rather than
//! a concrete backend, so the real [`JsonFileStore`] can be swapped for a
//! [`MemoryStore`] in tests.

mod json_store;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
pub use json_store::JsonFileStore;
use serde_json::Value;

/// Per-installation key-value storage surviving process restarts
///
/// `set` is synchronous: when it returns `Ok`, the value is durable.
pub trait KvStore {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// In-memory store with shared-handle semantics
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the code under test persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
