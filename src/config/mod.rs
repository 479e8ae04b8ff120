//! User configuration: a small JSON file under the platform config directory.
//!
//! All settings are optional. Absence and an explicitly empty value are kept
//! distinct on purpose: an empty `directory` is a configuration mistake and
//! is reported as such instead of being silently treated as "not set".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::utils::normalize_path;

const CONFIG_FILENAME: &str = "config.json";

/// Editor command used when none is configured
pub const DEFAULT_EDITOR_COMMAND: &str = "code";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Projects root override; defaults to the parent of the current project
    pub directory: Option<String>,
    /// Command used to open a project directory
    pub editor_command: Option<String>,
}

impl Settings {
    /// Editor command with the default applied
    pub fn editor_command(&self) -> &str {
        self.editor_command.as_deref().unwrap_or(DEFAULT_EDITOR_COMMAND)
    }
}

/// Load settings from the platform config directory
///
/// A missing file yields defaults; an unreadable or malformed file is an
/// error, since silently ignoring a broken config would mask typos.
pub fn load_settings() -> Result<Settings> {
    let Some(config_base) = dirs::config_dir() else {
        return Ok(Settings::default());
    };
    load_settings_from(&config_base.join("project-switcher").join(CONFIG_FILENAME))
}

/// Load settings from a specific file (missing file = defaults)
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read config file: {}", path.display()))
        }
    }
}

/// Resolve the directory containing all candidate projects
///
/// Precedence: explicit override (CLI flag), then the `directory` setting,
/// then the parent of the currently open project. The result is normalized,
/// with `~` expanded.
///
/// # Errors
///
/// Fails if a configured override is present but empty, or if the fallback
/// is needed and the current project has no parent directory.
pub fn resolve_projects_root(
    settings: &Settings,
    cli_override: Option<&str>,
    current_root: &Path,
) -> Result<PathBuf> {
    let configured = cli_override.or(settings.directory.as_deref());

    if let Some(dir) = configured {
        if dir.is_empty() {
            bail!("Projects directory setting is present but empty");
        }
        return Ok(PathBuf::from(normalize_path(dir)));
    }

    let parent = current_root
        .parent()
        .with_context(|| format!("Project has no parent directory: {}", current_root.display()))?;
    Ok(PathBuf::from(normalize_path(&parent.to_string_lossy())))
}
