use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::ProjectEntry;
use crate::utils::normalize_path;

/// Enumerate the candidate projects directly under `projects_root`
///
/// Returns one [`ProjectEntry`] per immediate child that is a directory, in
/// the order the OS yields them (no sorting; recency ranking happens later).
/// Symlinks are not followed, so a symlink to a directory is skipped.
///
/// # Errors
///
/// Returns an error if the root itself is missing or unreadable, or if an
/// entry cannot be accessed mid-iteration. There is no partial-result
/// recovery; an unreadable root is a misconfiguration the caller should see.
pub fn enumerate_projects(projects_root: &Path) -> Result<Vec<ProjectEntry>> {
    let entries = fs::read_dir(projects_root).with_context(|| {
        format!("Failed to read projects directory: {}", projects_root.display())
    })?;

    let mut projects = Vec::new();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;

        // lstat semantics: do not follow symlinks
        let file_type = entry.file_type().with_context(|| {
            format!("Failed to read file type: {}", entry.path().display())
        })?;
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        projects.push(ProjectEntry { id: normalize_path(&name), path: entry.path() });
    }

    Ok(projects)
}
