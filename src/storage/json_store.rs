//! File-backed store: load once, atomic rewrite on every set

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use super::KvStore;

const STATE_FILENAME: &str = "state.json";

/// Key-value store persisted as a single JSON object on disk
///
/// The whole map is loaded at open and rewritten atomically (temp file +
/// rename) on every write, so readers never observe a partial state.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: HashMap<String, Value>,
}

impl JsonFileStore {
    /// Open the default per-user store under the platform data directory
    pub fn open_default() -> Result<Self> {
        let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
        let state_dir = data_base.join("project-switcher");

        if !state_dir.exists() {
            fs::create_dir_all(&state_dir).context("Failed to create state directory")?;
        }

        Self::open(state_dir.join(STATE_FILENAME))
    }

    /// Open a store backed by a specific file
    pub fn open(path: PathBuf) -> Result<Self> {
        let map = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    // Corrupt state is not worth failing the command over;
                    // start fresh and let the next write replace it
                    eprintln!(
                        "Warning: ignoring corrupt state file {}: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(e)
                    .context(format!("Failed to read state file: {}", path.display()));
            }
        };

        Ok(Self { path, map })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_out(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.map).context("Failed to serialize state")?;

        // Atomic write: temp file + rename
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, json)
            .with_context(|| format!("Failed to write state temp file: {}", temp.display()))?;
        fs::rename(&temp, &self.path).with_context(|| {
            format!("Failed to rename state temp file into place: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.map.insert(key.to_string(), value);
        self.write_out()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join(STATE_FILENAME)).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STATE_FILENAME);

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("recent", json!(["a", "b"])).unwrap();

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("recent"), Some(json!(["a", "b"])));
    }

    #[test]
    fn test_set_is_synchronous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STATE_FILENAME);

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("focused", json!("my-app")).unwrap();

        // The file is durable the moment set returns
        let on_disk: HashMap<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("focused"), Some(&json!("my-app")));
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STATE_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("recent"), None);

        // A write replaces the corrupt contents
        store.set("recent", json!([])).unwrap();
        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("recent"), Some(json!([])));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STATE_FILENAME);

        let mut store = JsonFileStore::open(path).unwrap();
        store.set("key", json!(1)).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
