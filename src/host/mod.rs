//! The editor-host boundary: where the current window lives, how a project
//! gets opened, and how focus changes are observed.

pub mod editor;
pub mod focus;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use editor::EditorHost;
pub use focus::{FocusEvents, Subscription};

/// Capabilities the switcher needs from the surrounding editor environment
pub trait WorkspaceHost {
    /// Root path of the currently open workspace, `None` when no folder is
    /// open
    fn current_root(&self) -> Option<PathBuf>;

    /// Open `path` as a workspace, in a new window or reusing the current
    /// one
    fn open(&self, path: &Path, new_window: bool) -> Result<()>;
}
