//! Most-recently-used project tracking.
//!
//! The tracker owns two persisted values: the ordered recent-projects list
//! (front = most recent, no duplicates) and the identifier of the project
//! focused last. Every identifier is normalized before storage or
//! comparison, so `my-app`, `my-app` spelled with backslashes, and a
//! `~`-prefixed form all collapse to one entry.

use anyhow::Result;
use serde_json::{Value, json};

use crate::storage::KvStore;
use crate::utils::normalize_path;

/// Storage key for the ordered recent-projects list
pub const RECENT_KEY: &str = "project-switcher.recent";
/// Storage key for the last focused project
pub const FOCUSED_KEY: &str = "project-switcher.focused";

/// Tracks recency of project access over an injected key-value store
#[derive(Debug)]
pub struct MruTracker<S: KvStore> {
    store: S,
}

impl<S: KvStore> MruTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record that `project` was just opened or focused
    ///
    /// Normalizes the identifier, marks it focused, and moves it to the
    /// front of the recent list, removing any prior occurrence. Both values
    /// are written to the store before this returns. The identifier is not
    /// validated against the filesystem; any string is accepted.
    pub fn record_access(&mut self, project: &str) -> Result<()> {
        let id = normalize_path(project);

        self.store.set(FOCUSED_KEY, Value::String(id.clone()))?;

        let mut recent = self.list();
        recent.retain(|p| p != &id);
        recent.insert(0, id);
        self.store.set(RECENT_KEY, json!(recent))?;

        Ok(())
    }

    /// The recent list as persisted, most recent first
    ///
    /// Entries that are not strings (from a hand-edited state file) are
    /// dropped rather than erroring.
    pub fn list(&self) -> Vec<String> {
        match self.store.get(RECENT_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The last focused project, if one was ever recorded
    pub fn focused(&self) -> Option<String> {
        match self.store.get(FOCUSED_KEY) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Rank `candidates` by recency
    ///
    /// Returns the recent entries that still exist among `candidates` in
    /// recency order, followed by the remaining candidates in the order
    /// given (directory-enumeration order; not contractually sorted), each
    /// exactly once.
    pub fn merge(&self, candidates: &[String]) -> Vec<String> {
        let mut ranked: Vec<String> = Vec::with_capacity(candidates.len());

        for id in self.list() {
            if candidates.contains(&id) && !ranked.contains(&id) {
                ranked.push(id);
            }
        }

        for id in candidates {
            if !ranked.contains(id) {
                ranked.push(id.clone());
            }
        }

        ranked
    }
}
