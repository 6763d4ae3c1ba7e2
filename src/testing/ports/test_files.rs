//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared across port-scoped test doubles.
///
/// Tests seed files via this handle before passing `MockRepositoryFs` to
/// production code, then inspect contents and the write log afterwards.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<String, String>>>,
    pub(crate) writes: Arc<Mutex<Vec<String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store. Seeding is not recorded as a write.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Paths written through the port, in write order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().unwrap().clear();
    }
}
