//! project-switcher - Jump between sibling project directories
//!
//! This library implements a most-recently-used project switcher for people
//! who keep all their projects under one directory. It provides:
//!
//! - An MRU tracker with normalization and de-duplication guarantees,
//!   persisted through an injectable key-value store
//! - Textual path normalization (slash direction, drive-letter prefixes,
//!   `~` expansion)
//! - Sibling-directory enumeration
//! - An interactive fuzzy picker and the switch orchestration around it
//!
//! # Example
//!
//! ```
//! use project_switcher::mru::MruTracker;
//! use project_switcher::storage::MemoryStore;
//!
//! let mut tracker = MruTracker::new(MemoryStore::new());
//! tracker.record_access("my-app")?;
//! tracker.record_access("other-app")?;
//! assert_eq!(tracker.list(), vec!["other-app", "my-app"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod host;
pub mod mru;
pub mod projects;
pub mod storage;
pub mod switcher;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use mru::MruTracker;
pub use projects::enumerate_projects;
pub use storage::{JsonFileStore, KvStore, MemoryStore};
pub use switcher::{SwitchOutcome, run_switch};
pub use utils::paths::{format_path_with_tilde, normalize_path, project_id_for};
