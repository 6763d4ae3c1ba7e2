//! Per-file outcomes and the run summary built from them.

use serde::Serialize;

use crate::domain::TargetId;

/// What happened to one target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "kebab-case")]
pub enum FileStatus {
    /// The file was absent or unusable and was rendered from its default template.
    CreatedFromTemplate,
    /// The file was absent and written for the first time (no template involved).
    Created,
    /// One or more values changed.
    Updated,
    /// Nothing needed to change; the file was not written.
    Unchanged,
    /// A repair was declined; the file was left as it was.
    Skipped(String),
    /// Processing this file failed; other files were still processed.
    Failed(String),
}

impl FileStatus {
    /// Whether this outcome implies the file was written.
    pub fn wrote_file(&self) -> bool {
        matches!(self, FileStatus::CreatedFromTemplate | FileStatus::Created | FileStatus::Updated)
    }
}

/// Outcome for one target file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub target: TargetId,
    pub path: String,
    #[serde(flatten)]
    pub status: FileStatus,
    /// Names of the secrets or keys whose value changed.
    pub changed: Vec<String>,
    pub warnings: Vec<String>,
}

impl FileReport {
    pub fn new(target: TargetId, path: &str, status: FileStatus) -> Self {
        Self { target, path: path.to_string(), status, changed: Vec::new(), warnings: Vec::new() }
    }
}

/// Process exit codes, distinct per halt reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    /// Error outside per-file processing (config, randomness).
    Fatal = 1,
    /// At least one file failed.
    FileFailures = 2,
    /// At least one repair was declined and nothing failed.
    RepairDeclined = 3,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Everything one run did, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub target: String,
    pub files: Vec<FileReport>,
    /// Fingerprint of the database password shared by every DSN and the env file.
    pub database_password_fingerprint: String,
}

impl RunSummary {
    pub fn exit_status(&self) -> ExitStatus {
        if self.files.iter().any(|f| matches!(f.status, FileStatus::Failed(_))) {
            ExitStatus::FileFailures
        } else if self.files.iter().any(|f| matches!(f.status, FileStatus::Skipped(_))) {
            ExitStatus::RepairDeclined
        } else {
            ExitStatus::Success
        }
    }

    pub fn report(&self, target: TargetId) -> Option<&FileReport> {
        self.files.iter().find(|f| f.target == target)
    }
}
