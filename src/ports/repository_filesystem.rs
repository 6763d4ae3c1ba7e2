//! Repository-level filesystem operations.
//!
//! This port provides whole-file text I/O scoped to the root of the checkout
//! being seeded. It knows nothing about which files authseed manages.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the repository root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
