use crate::app::AppContext;
use crate::domain::plan;
use crate::domain::{AppError, FileReport, FileStatus, RunSecrets, TargetId};
use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

pub(super) const ENV_KEY: &str = "POSTGRES_PASSWORD";

/// Overwrite the env file with the database password.
///
/// Prior content is discarded, including any other variables it held.
pub(super) fn seed_env_file<F, S, C, T>(
    ctx: &AppContext<F, S, C, T>,
    path: &str,
    secrets: &RunSecrets,
) -> Result<FileReport, AppError>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    let content = plan::render_env_file(secrets);
    let target = TargetId::DotEnv;

    let status = if !ctx.files().file_exists(path) {
        FileStatus::Created
    } else {
        match ctx.files().read_file(path) {
            Ok(existing) if existing == content => FileStatus::Unchanged,
            Ok(_) => FileStatus::Updated,
            Err(err) => {
                tracing::debug!(path, error = %err, "env file unreadable; overwriting");
                FileStatus::Updated
            }
        }
    };

    let mut report = FileReport::new(target, path, status);
    if report.status.wrote_file() {
        ctx.files().write_file(path, &content)?;
        report.changed.push(ENV_KEY.to_string());
    }

    tracing::info!(path, status = ?report.status, "env file processed");
    Ok(report)
}
