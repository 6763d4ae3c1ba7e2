//! Identity and shape of every file authseed manages.

use std::fmt;

use serde::Serialize;

use crate::domain::config::{DeploymentTarget, PathsConfig};

/// How a target file is read and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Hand-authored YAML patched in place by placeholder matching.
    TextConfig,
    /// Kubernetes Secret manifest updated through its `stringData` mapping.
    SecretManifest,
    /// `KEY=value` file rewritten in full on every run.
    EnvFile,
}

/// A managed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetId {
    HydraConfig,
    KratosConfig,
    HydraSecret,
    KratosSecret,
    PostgresSecret,
    DotEnv,
}

impl TargetId {
    pub fn kind(&self) -> TargetKind {
        match self {
            TargetId::HydraConfig | TargetId::KratosConfig => TargetKind::TextConfig,
            TargetId::HydraSecret | TargetId::KratosSecret | TargetId::PostgresSecret => {
                TargetKind::SecretManifest
            }
            TargetId::DotEnv => TargetKind::EnvFile,
        }
    }

    /// Human-readable label used in summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetId::HydraConfig => "Hydra config",
            TargetId::KratosConfig => "Kratos config",
            TargetId::HydraSecret => "Hydra Secret",
            TargetId::KratosSecret => "Kratos Secret",
            TargetId::PostgresSecret => "PostgreSQL Secret",
            TargetId::DotEnv => "dotenv",
        }
    }

    /// Name of the embedded default template, if the target has one.
    pub fn template_name(&self) -> Option<&'static str> {
        match self {
            TargetId::HydraConfig => Some("hydra.yml.j2"),
            TargetId::KratosConfig => Some("kratos.yml.j2"),
            TargetId::HydraSecret => Some("hydra-secrets.yaml.j2"),
            TargetId::KratosSecret => Some("kratos-secrets.yaml.j2"),
            TargetId::PostgresSecret => Some("postgres-secrets.yaml.j2"),
            TargetId::DotEnv => None,
        }
    }

    pub fn path<'a>(&self, paths: &'a PathsConfig) -> &'a str {
        match self {
            TargetId::HydraConfig => &paths.hydra_config,
            TargetId::KratosConfig => &paths.kratos_config,
            TargetId::HydraSecret => &paths.hydra_secret,
            TargetId::KratosSecret => &paths.kratos_secret,
            TargetId::PostgresSecret => &paths.postgres_secret,
            TargetId::DotEnv => &paths.dotenv,
        }
    }

    /// Files processed for a deployment target, in processing order.
    pub fn sequence(target: DeploymentTarget) -> &'static [TargetId] {
        match target {
            DeploymentTarget::Local => {
                &[TargetId::HydraConfig, TargetId::KratosConfig, TargetId::DotEnv]
            }
            DeploymentTarget::Kubernetes => &[
                TargetId::HydraSecret,
                TargetId::KratosSecret,
                TargetId::PostgresSecret,
                TargetId::DotEnv,
            ],
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
