use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use super::WorkspaceHost;

/// Host implementation that shells out to an editor command
///
/// The current workspace is the process working directory, and opening a
/// project runs `<editor> -n <path>` (new window) or `<editor> -r <path>`
/// (reuse window), the flag convention VS Code-style editors share.
#[derive(Debug)]
pub struct EditorHost {
    editor_command: String,
}

impl EditorHost {
    pub fn new(editor_command: impl Into<String>) -> Self {
        Self { editor_command: editor_command.into() }
    }
}

impl WorkspaceHost for EditorHost {
    fn current_root(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }

    fn open(&self, path: &Path, new_window: bool) -> Result<()> {
        let window_flag = if new_window { "-n" } else { "-r" };

        let status = Command::new(&self.editor_command)
            .arg(window_flag)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor: {}", self.editor_command))?;

        if !status.success() {
            bail!("Editor {} exited with {} opening {}", self.editor_command, status, path.display());
        }

        Ok(())
    }
}
