use crate::app::AppContext;
use crate::domain::plan::{self, TemplateContext};
use crate::domain::{
    AppError, FileReport, FileStatus, RunSecrets, SecretManifest, TargetId, derivation,
};
use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

use super::bootstrap::{Bootstrap, BootstrapReason, bootstrap};

/// Update the `stringData` of a Kubernetes Secret manifest.
///
/// Absent manifests are bootstrapped without asking. A manifest that exists but
/// cannot be parsed, or lacks a `stringData` mapping, is only replaced after
/// confirmation. Explicit keys rotate whenever their value differs; derived
/// keys are re-checked on every run.
pub(super) fn seed_secret_manifest<F, S, C, T>(
    ctx: &AppContext<F, S, C, T>,
    target: TargetId,
    path: &str,
    secrets: &RunSecrets,
    template_context: &TemplateContext,
) -> Result<FileReport, AppError>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    let reason = if ctx.files().file_exists(path) {
        let content = ctx.files().read_file(path)?;
        match SecretManifest::parse(&content) {
            Ok(manifest) => {
                return update_manifest(
                    ctx,
                    target,
                    path,
                    manifest,
                    secrets,
                    template_context,
                    false,
                );
            }
            Err(defect) => {
                tracing::warn!(path, defect = %defect.describe(), "secret manifest is unusable");
                BootstrapReason::Defective(defect)
            }
        }
    } else {
        BootstrapReason::Missing
    };

    match bootstrap(ctx, target, path, &reason, template_context)? {
        Bootstrap::Created(content) => {
            let manifest = SecretManifest::parse(&content).map_err(|defect| {
                AppError::Internal(format!(
                    "default template for {} is unusable: {}",
                    target,
                    defect.describe()
                ))
            })?;
            update_manifest(ctx, target, path, manifest, secrets, template_context, true)
        }
        Bootstrap::Declined(reason) => {
            Ok(FileReport::new(target, path, FileStatus::Skipped(reason)))
        }
    }
}

fn update_manifest<F, S, C, T>(
    ctx: &AppContext<F, S, C, T>,
    target: TargetId,
    path: &str,
    mut manifest: SecretManifest,
    secrets: &RunSecrets,
    template_context: &TemplateContext,
    bootstrapped: bool,
) -> Result<FileReport, AppError>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    let updates = plan::manifest_updates(target, secrets);
    let derived = derivation::derived_values(target, secrets, &template_context.database)?;
    let outcome = manifest.apply(&updates, &derived)?;

    if outcome.is_dirty() {
        ctx.files().write_file(path, &manifest.to_yaml(path)?)?;
    }

    let status = match (bootstrapped, outcome.is_dirty()) {
        (true, _) => FileStatus::CreatedFromTemplate,
        (false, true) => FileStatus::Updated,
        (false, false) => FileStatus::Unchanged,
    };

    let mut report = FileReport::new(target, path, status);
    report.warnings = outcome
        .unmanaged
        .iter()
        .map(|key| format!("'{}' is not present in stringData; left unmanaged", key))
        .collect();
    report.changed = outcome.changed;

    tracing::info!(
        path,
        status = ?report.status,
        keys = report.changed.len(),
        "secret manifest processed"
    );
    Ok(report)
}
