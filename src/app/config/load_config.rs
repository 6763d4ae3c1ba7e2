//! Seed configuration loading from the repository or an explicit file.

use std::path::Path;

use crate::domain::config::{self, SeedConfig};
use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// Load seed configuration.
///
/// An explicit path must exist and may live outside the root. Without one,
/// `authseed.toml` at the root is used when present; otherwise every setting
/// takes its default.
pub fn load_config<F: RepositoryFilesystem>(
    repository: &F,
    explicit: Option<&Path>,
) -> Result<SeedConfig, AppError> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|err| {
            AppError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                err
            ))
        })?;
        tracing::debug!(path = %path.display(), "loaded explicit config file");
        return config::parse_config_content(&content);
    }

    if !repository.file_exists(config::paths::CONFIG_FILE) {
        tracing::debug!("no {} found; using defaults", config::paths::CONFIG_FILE);
        return Ok(SeedConfig::default());
    }

    let content = repository.read_file(config::paths::CONFIG_FILE)?;
    config::parse_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeploymentTarget;
    use crate::testing::{MockRepositoryFs, TestFiles};

    #[test]
    fn missing_config_yields_defaults() {
        let fs = MockRepositoryFs::new(TestFiles::new());
        let config = load_config(&fs, None).unwrap();
        assert_eq!(config.target, DeploymentTarget::Local);
        assert_eq!(config.paths.dotenv, ".env");
    }

    #[test]
    fn root_config_is_parsed() {
        let files = TestFiles::new();
        files.add(
            "authseed.toml",
            "target = \"kubernetes\"\n\n[database]\nhost = \"db.internal\"\n",
        );
        let config = load_config(&MockRepositoryFs::new(files), None).unwrap();
        assert_eq!(config.target, DeploymentTarget::Kubernetes);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let files = TestFiles::new();
        files.add("authseed.toml", "[paths]\nhydra = \"x.yml\"\n");
        let result = load_config(&MockRepositoryFs::new(files), None);
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn explicit_config_must_exist() {
        let fs = MockRepositoryFs::new(TestFiles::new());
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&fs, Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn explicit_config_is_read_from_disk() {
        let fs = MockRepositoryFs::new(TestFiles::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(&path, "[paths]\ndotenv = \"deploy/.env\"\n").unwrap();

        let config = load_config(&fs, Some(&path)).unwrap();
        assert_eq!(config.paths.dotenv, "deploy/.env");
    }
}
