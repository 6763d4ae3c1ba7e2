//! Test double for `RepositoryFilesystem`.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
    fail_writes_to: Option<String>,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, fail_writes_to: None }
    }

    /// Make every write to `path` fail with a permission error.
    pub fn failing_writes_to(mut self, path: &str) -> Self {
        self.fail_writes_to = Some(path.to_string());
        self
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self.files.writes.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, _path: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
