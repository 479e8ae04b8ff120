pub mod discovery;

use std::path::PathBuf;

pub use discovery::enumerate_projects;

/// A candidate project directory under the projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Normalized identifier (the directory name relative to the root)
    pub id: String,
    /// Absolute location on disk
    pub path: PathBuf,
}
