//! The `seed` command: generate one set of secrets and push it into every
//! managed file of the selected deployment target.

mod bootstrap;
mod env_file;
mod secret_manifest;
mod text_config;

use crate::app::AppContext;
use crate::domain::plan::TemplateContext;
use crate::domain::{
    AppError, DeploymentTarget, FileReport, FileStatus, RunSecrets, RunSummary, SeedConfig,
    TargetId, TargetKind,
};
use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

/// Options for the seed command.
#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    /// Overrides the target from configuration.
    pub target: Option<DeploymentTarget>,
}

/// Execute the seed command.
///
/// Secrets are generated before any file is read, so a randomness failure
/// aborts the run with nothing written. Per-file errors are recorded in the
/// summary and processing continues with the next file.
pub fn execute<F, S, C, T>(
    ctx: &AppContext<F, S, C, T>,
    config: &SeedConfig,
    options: &SeedOptions,
) -> Result<RunSummary, AppError>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    let target = options.target.unwrap_or(config.target);
    let secrets = RunSecrets::generate(|len| ctx.secrets().generate(len))?;
    let template_context = TemplateContext::new(&secrets, &config.database)?;

    tracing::info!(
        deployment = %target,
        database_password = %secrets.database_password.fingerprint(),
        "generated run secrets"
    );

    let mut summary = RunSummary {
        target: target.to_string(),
        files: Vec::new(),
        database_password_fingerprint: secrets.database_password.fingerprint(),
    };

    for &id in TargetId::sequence(target) {
        let path = id.path(&config.paths);
        let result = match id.kind() {
            TargetKind::TextConfig => {
                text_config::seed_text_config(ctx, id, path, &secrets, &template_context)
            }
            TargetKind::SecretManifest => {
                secret_manifest::seed_secret_manifest(ctx, id, path, &secrets, &template_context)
            }
            TargetKind::EnvFile => env_file::seed_env_file(ctx, path, &secrets),
        };

        let report = result.unwrap_or_else(|err| {
            tracing::error!(path, error = %err, "failed to process file");
            FileReport::new(id, path, FileStatus::Failed(err.to_string()))
        });
        summary.files.push(report);
    }

    Ok(summary)
}
