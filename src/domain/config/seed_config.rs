//! Seed configuration domain models.

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

use super::paths;

/// Which family of files a run manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    /// Plain YAML service configs consumed by docker-compose.
    #[default]
    Local,
    /// Kubernetes Secret manifests.
    Kubernetes,
}

impl DeploymentTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Local => "local",
            DeploymentTarget::Kubernetes => "kubernetes",
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentTarget {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(DeploymentTarget::Local),
            "kubernetes" | "k8s" => Ok(DeploymentTarget::Kubernetes),
            other => Err(AppError::InvalidConfig(format!(
                "Unknown deployment target '{}': expected local or kubernetes",
                other
            ))),
        }
    }
}

/// Configuration loaded from `authseed.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Target used when `--target` is not given.
    #[serde(default)]
    pub target: DeploymentTarget,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.paths.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

/// Managed file locations, relative to the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_hydra_config")]
    pub hydra_config: String,
    #[serde(default = "default_kratos_config")]
    pub kratos_config: String,
    #[serde(default = "default_hydra_secret")]
    pub hydra_secret: String,
    #[serde(default = "default_kratos_secret")]
    pub kratos_secret: String,
    #[serde(default = "default_postgres_secret")]
    pub postgres_secret: String,
    #[serde(default = "default_dotenv")]
    pub dotenv: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            hydra_config: default_hydra_config(),
            kratos_config: default_kratos_config(),
            hydra_secret: default_hydra_secret(),
            kratos_secret: default_kratos_secret(),
            postgres_secret: default_postgres_secret(),
            dotenv: default_dotenv(),
        }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("hydra_config", &self.hydra_config),
            ("kratos_config", &self.kratos_config),
            ("hydra_secret", &self.hydra_secret),
            ("kratos_secret", &self.kratos_secret),
            ("postgres_secret", &self.postgres_secret),
            ("dotenv", &self.dotenv),
        ] {
            validate_relative_path(field, value)?;
        }
        Ok(())
    }
}

fn validate_relative_path(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfig(format!("paths.{} must not be empty", field)));
    }
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(AppError::InvalidConfig(format!(
            "paths.{} must be relative to the root: {}",
            field, value
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::InvalidConfig(format!(
            "paths.{} must not contain '..': {}",
            field, value
        )));
    }
    Ok(())
}

/// A database login and the database it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseAccount {
    pub user: String,
    pub name: String,
}

impl DatabaseAccount {
    fn new(user: &str, name: &str) -> Self {
        Self { user: user.to_string(), name: name.to_string() }
    }

    fn validate(&self, section: &str) -> Result<(), AppError> {
        if self.user.trim().is_empty() {
            return Err(AppError::InvalidConfig(format!(
                "database.{}.user must not be empty",
                section
            )));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidConfig(format!(
                "database.{}.name must not be empty",
                section
            )));
        }
        Ok(())
    }
}

/// Connection parameters shared by every DSN authseed derives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Query string appended to every DSN, without the leading `?`.
    #[serde(default = "default_options")]
    pub options: String,
    /// Superuser written to the PostgreSQL Secret.
    #[serde(default = "default_admin")]
    pub admin: DatabaseAccount,
    #[serde(default = "default_hydra")]
    pub hydra: DatabaseAccount,
    #[serde(default = "default_kratos")]
    pub kratos: DatabaseAccount,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            options: default_options(),
            admin: default_admin(),
            hydra: default_hydra(),
            kratos: default_kratos(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.host.trim().is_empty() {
            return Err(AppError::InvalidConfig("database.host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(AppError::InvalidConfig("database.port must be greater than 0".to_string()));
        }
        if self.options.starts_with('?') {
            return Err(AppError::InvalidConfig(
                "database.options must not start with '?'".to_string(),
            ));
        }
        self.admin.validate("admin")?;
        self.hydra.validate("hydra")?;
        self.kratos.validate("kratos")?;
        Ok(())
    }
}

fn default_hydra_config() -> String {
    paths::HYDRA_CONFIG.to_string()
}

fn default_kratos_config() -> String {
    paths::KRATOS_CONFIG.to_string()
}

fn default_hydra_secret() -> String {
    paths::HYDRA_SECRET.to_string()
}

fn default_kratos_secret() -> String {
    paths::KRATOS_SECRET.to_string()
}

fn default_postgres_secret() -> String {
    paths::POSTGRES_SECRET.to_string()
}

fn default_dotenv() -> String {
    paths::DOTENV.to_string()
}

fn default_host() -> String {
    "postgres-svc".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_options() -> String {
    "sslmode=disable&max_conns=20&max_idle_conns=4".to_string()
}

fn default_admin() -> DatabaseAccount {
    DatabaseAccount::new("postgres", "postgres")
}

fn default_hydra() -> DatabaseAccount {
    DatabaseAccount::new("hydra", "hydra")
}

fn default_kratos() -> DatabaseAccount {
    DatabaseAccount::new("kratos", "kratos")
}
