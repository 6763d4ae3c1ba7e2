//! API facade for the application.
//!
//! Glues adapter construction, configuration loading and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{ConfirmationPolicy, EmbeddedTemplateCatalog, FilesystemStore, OsSecretSource};
use crate::app::commands::{secret, seed};
use crate::app::{AppContext, config};

pub use crate::app::commands::secret::DEFAULT_SECRET_BYTES;
pub use crate::app::commands::seed::SeedOptions;
pub use crate::domain::{AppError, DeploymentTarget, RunSummary, Secret};

/// Create an `AppContext` rooted at `root`.
fn create_context(
    root: PathBuf,
    confirmation: ConfirmationPolicy,
) -> AppContext<FilesystemStore, OsSecretSource, ConfirmationPolicy, EmbeddedTemplateCatalog> {
    AppContext::new(
        FilesystemStore::new(root),
        OsSecretSource,
        confirmation,
        EmbeddedTemplateCatalog::new(),
    )
}

/// Seed every managed file under the current directory.
pub fn seed(
    options: &SeedOptions,
    confirmation: ConfirmationPolicy,
) -> Result<RunSummary, AppError> {
    seed_at(std::env::current_dir()?, None, options, confirmation)
}

/// Seed every managed file under `root`.
///
/// `config_path` overrides the default `authseed.toml` lookup at the root.
pub fn seed_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    options: &SeedOptions,
    confirmation: ConfirmationPolicy,
) -> Result<RunSummary, AppError> {
    let root = root.into();
    if !root.is_dir() {
        return Err(AppError::config_error(format!(
            "Root directory does not exist: {}",
            root.display()
        )));
    }

    let ctx = create_context(root, confirmation);
    let config = config::load_config(ctx.files(), config_path)?;
    seed::execute(&ctx, &config, options)
}

/// Generate one secret of `length_bytes` random bytes.
pub fn generate_secret(length_bytes: usize) -> Result<Secret, AppError> {
    secret::execute(&OsSecretSource, length_bytes)
}
