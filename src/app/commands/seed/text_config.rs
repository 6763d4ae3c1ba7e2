use crate::app::AppContext;
use crate::domain::plan::{self, TemplateContext};
use crate::domain::{AppError, FileReport, FileStatus, RunSecrets, TargetId, replace_placeholders};
use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

use super::bootstrap::{Bootstrap, BootstrapReason, bootstrap};

pub(super) const NOTHING_REPLACED_WARNING: &str =
    "no placeholders replaced; placeholders might be missing or already replaced";

/// Replace placeholder literals in a hand-authored YAML config.
///
/// The file is only bootstrapped from its template when absent. An existing
/// file is never rewritten unless at least one placeholder was found.
pub(super) fn seed_text_config<F, S, C, T>(
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
    let (content, bootstrapped) = if ctx.files().file_exists(path) {
        (ctx.files().read_file(path)?, false)
    } else {
        match bootstrap(ctx, target, path, &BootstrapReason::Missing, template_context)? {
            Bootstrap::Created(content) => (content, true),
            Bootstrap::Declined(reason) => {
                return Ok(FileReport::new(target, path, FileStatus::Skipped(reason)));
            }
        }
    };

    let instructions = plan::text_instructions(target, secrets);
    let patch = replace_placeholders(&content, &instructions)?;

    let status = match (bootstrapped, patch.changed()) {
        (true, _) => FileStatus::CreatedFromTemplate,
        (false, true) => FileStatus::Updated,
        (false, false) => FileStatus::Unchanged,
    };

    let mut report = FileReport::new(target, path, status);
    if patch.changed() {
        ctx.files().write_file(path, &patch.content)?;
        report.changed =
            patch.applied_names(&instructions).into_iter().map(str::to_string).collect();
    } else if !bootstrapped {
        report.warnings.push(NOTHING_REPLACED_WARNING.to_string());
    }

    tracing::info!(
        path,
        status = ?report.status,
        replaced = report.changed.len(),
        "text config processed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedTemplateCatalog;
    use crate::domain::config::DatabaseConfig;
    use crate::domain::plan::{HYDRA_COOKIE_PLACEHOLDER, KRATOS_CIPHER_PLACEHOLDER};
    use crate::testing::{MockRepositoryFs, ScriptedConfirmation, SequenceSecretSource, TestFiles};

    const HYDRA_PATH: &str = "config/hydra/hydra.yml";
    const KRATOS_PATH: &str = "config/kratos/kratos.yml";

    type TestContext = AppContext<
        MockRepositoryFs,
        SequenceSecretSource,
        ScriptedConfirmation,
        EmbeddedTemplateCatalog,
    >;

    fn context(files: &TestFiles) -> TestContext {
        AppContext::new(
            MockRepositoryFs::new(files.clone()),
            SequenceSecretSource::new(),
            ScriptedConfirmation::answering(false),
            EmbeddedTemplateCatalog::new(),
        )
    }

    fn run(ctx: &TestContext, target: TargetId, path: &str) -> (FileReport, RunSecrets) {
        let secrets = RunSecrets::generate(|len| ctx.secrets().generate(len)).unwrap();
        let template_context = TemplateContext::new(&secrets, &DatabaseConfig::default()).unwrap();
        let report = seed_text_config(ctx, target, path, &secrets, &template_context).unwrap();
        (report, secrets)
    }

    #[test]
    fn missing_config_is_bootstrapped_and_filled() {
        let files = TestFiles::new();
        let ctx = context(&files);

        let (report, secrets) = run(&ctx, TargetId::HydraConfig, HYDRA_PATH);

        assert_eq!(report.status, FileStatus::CreatedFromTemplate);
        assert_eq!(report.changed.len(), 4);
        let written = files.get(HYDRA_PATH).unwrap();
        assert!(!written.contains("CHANGE_THIS_TO_A_SECURE"));
        assert!(written.contains(&format!("- \"{}\"", secrets.hydra_system_1.expose())));
        assert!(written.contains(&format!("salt: \"{}\"", secrets.hydra_pairwise_salt.expose())));
        assert_eq!(ctx.confirmation().prompt_count(), 0);
    }

    #[test]
    fn existing_placeholders_are_replaced_in_place() {
        let files = TestFiles::new();
        let original = format!(
            "# kratos\nsecrets:\n  cookie:\n    - \"{}\"\n  cipher:\n    - \"{}\" # keep\n",
            "CHANGE_THIS_TO_A_SECURE_RANDOM_KRATOS_COOKIE_SECRET", KRATOS_CIPHER_PLACEHOLDER
        );
        files.add(KRATOS_PATH, &original);
        let ctx = context(&files);

        let (report, secrets) = run(&ctx, TargetId::KratosConfig, KRATOS_PATH);

        assert_eq!(report.status, FileStatus::Updated);
        assert_eq!(report.changed, vec!["secrets.cookie[0]", "secrets.cipher[0]"]);
        let expected = format!(
            "# kratos\nsecrets:\n  cookie:\n    - \"{}\"\n  cipher:\n    - \"{}\" # keep\n",
            secrets.kratos_cookie.expose(),
            secrets.kratos_cipher.expose()
        );
        assert_eq!(files.get(KRATOS_PATH).unwrap(), expected);
    }

    #[test]
    fn second_run_leaves_file_untouched() {
        let files = TestFiles::new();
        let ctx = context(&files);
        run(&ctx, TargetId::HydraConfig, HYDRA_PATH);
        let first = files.get(HYDRA_PATH).unwrap();
        files.clear_writes();

        let (report, _) = run(&ctx, TargetId::HydraConfig, HYDRA_PATH);

        assert_eq!(report.status, FileStatus::Unchanged);
        assert_eq!(report.warnings, vec![NOTHING_REPLACED_WARNING.to_string()]);
        assert!(files.writes().is_empty());
        assert_eq!(files.get(HYDRA_PATH).unwrap(), first);
    }

    #[test]
    fn partially_filled_config_only_touches_remaining_placeholders() {
        let files = TestFiles::new();
        let original = format!(
            "secrets:\n  system:\n    - \"already-set\"\n  cookie:\n    - \"{}\"\n",
            HYDRA_COOKIE_PLACEHOLDER
        );
        files.add(HYDRA_PATH, &original);
        let ctx = context(&files);

        let (report, secrets) = run(&ctx, TargetId::HydraConfig, HYDRA_PATH);

        assert_eq!(report.changed, vec!["secrets.cookie[0]"]);
        let written = files.get(HYDRA_PATH).unwrap();
        assert!(written.contains("- \"already-set\""));
        assert!(written.contains(secrets.hydra_cookie.expose()));
    }

    #[test]
    fn write_failure_is_returned() {
        let files = TestFiles::new();
        files.add(HYDRA_PATH, &format!("cookie:\n  - \"{}\"\n", HYDRA_COOKIE_PLACEHOLDER));
        let ctx = AppContext::new(
            MockRepositoryFs::new(files.clone()).failing_writes_to(HYDRA_PATH),
            SequenceSecretSource::new(),
            ScriptedConfirmation::answering(false),
            EmbeddedTemplateCatalog::new(),
        );
        let secrets = RunSecrets::generate(|len| ctx.secrets().generate(len)).unwrap();
        let template_context = TemplateContext::new(&secrets, &DatabaseConfig::default()).unwrap();

        let result =
            seed_text_config(&ctx, TargetId::HydraConfig, HYDRA_PATH, &secrets, &template_context);

        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
