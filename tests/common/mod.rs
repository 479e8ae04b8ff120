//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a projects root populated with sibling project directories
pub struct ProjectsRootBuilder {
    temp_dir: TempDir,
}

impl ProjectsRootBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path of the projects root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory under the root
    pub fn with_project(self, name: &str) -> Self {
        fs::create_dir(self.temp_dir.path().join(name)).expect("Failed to create project dir");
        self
    }

    /// Add a plain file under the root (should never show up as a project)
    pub fn with_file(self, name: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), "not a project")
            .expect("Failed to create file");
        self
    }
}

/// A fake per-user data home whose layout matches what the binary expects
pub struct DataHome {
    temp_dir: TempDir,
}

impl DataHome {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Value for the XDG_DATA_HOME environment variable
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn state_file(&self) -> PathBuf {
        self.temp_dir.path().join("project-switcher").join("state.json")
    }

    /// Seed the persisted state file with raw JSON
    pub fn with_state(self, json: &str) -> Self {
        let dir = self.temp_dir.path().join("project-switcher");
        fs::create_dir_all(&dir).expect("Failed to create state dir");
        fs::write(dir.join("state.json"), json).expect("Failed to write state file");
        self
    }

    /// Read the persisted state back as JSON
    pub fn read_state(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.state_file()).expect("state file should exist");
        serde_json::from_str(&contents).expect("state file should be valid JSON")
    }
}
