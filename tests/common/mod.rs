//! Shared testing utilities for authseed CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated repository root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the repository root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory outside the repository root.
    pub fn outside_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `authseed` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("authseed").expect("Failed to locate authseed binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// The password currently recorded in `.env`.
    pub fn env_password(&self) -> String {
        self.read(".env")
            .trim_end()
            .strip_prefix("POSTGRES_PASSWORD=")
            .expect(".env should hold POSTGRES_PASSWORD")
            .to_string()
    }

    /// A `stringData` value from a Secret manifest.
    pub fn string_data(&self, relative: &str, key: &str) -> Option<String> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(&self.read(relative)).expect("manifest should be valid YAML");
        value.get("stringData")?.get(key)?.as_str().map(str::to_string)
    }
}

/// Whether `value` is lowercase hex of exactly `len` characters.
#[allow(dead_code)]
pub fn is_hex(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
