pub mod config;
pub mod derivation;
pub mod error;
pub mod manifest;
pub mod outcome;
pub mod placeholder;
pub mod plan;
pub mod secret;
pub mod targets;

pub use config::{DatabaseConfig, DeploymentTarget, PathsConfig, SeedConfig};
pub use error::AppError;
pub use manifest::{DerivedValue, ManifestDefect, ManifestReport, SecretManifest, SecretUpdate};
pub use outcome::{ExitStatus, FileReport, FileStatus, RunSummary};
pub use placeholder::{PlaceholderPatch, ReplacementInstruction, replace_placeholders};
pub use secret::{RunSecrets, Secret};
pub use targets::{TargetId, TargetKind};
