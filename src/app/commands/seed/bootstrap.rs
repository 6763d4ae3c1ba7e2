//! Materialize a target file from its default template.
//!
//! Used when a target is absent, or present but unusable. Absent files are
//! created silently; replacing an existing file requires confirmation. The
//! rendered file is written and re-read so the caller runs its normal update
//! pass against it as if it had always been there.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::plan::TemplateContext;
use crate::domain::{AppError, ManifestDefect, TargetId};
use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

/// Why a target must be bootstrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapReason {
    Missing,
    Defective(ManifestDefect),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The template was written; holds the content re-read from disk.
    Created(String),
    /// Overwrite was declined; holds the reason shown to the user.
    Declined(String),
}

pub fn bootstrap<F, S, C, T>(
    ctx: &AppContext<F, S, C, T>,
    target: TargetId,
    path: &str,
    reason: &BootstrapReason,
    template_context: &TemplateContext,
) -> Result<Bootstrap, AppError>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    if let BootstrapReason::Defective(defect) = reason {
        let prompt = format!(
            "{} at {} is unusable: {}. Replace it with the default template?",
            target,
            path,
            defect.describe()
        );
        if !ctx.confirmation().confirm(&prompt)? {
            tracing::warn!(path, "replacement of unusable file declined");
            return Ok(Bootstrap::Declined(format!(
                "{}; replacement declined",
                defect.describe()
            )));
        }
    }

    let template = target
        .template_name()
        .ok_or_else(|| AppError::Internal(format!("{} has no default template", target)))?;

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        let parent = parent.to_string_lossy();
        if !ctx.files().file_exists(&parent) {
            ctx.files().create_dir_all(&parent)?;
        }
    }

    let rendered = ctx.templates().render(template, template_context)?;
    ctx.files().write_file(path, &rendered)?;
    tracing::info!(path, template, "created file from default template");

    ctx.files().read_file(path).map(Bootstrap::Created)
}
