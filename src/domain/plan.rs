//! Per-file instruction tables built from one generation of secrets.

use serde::Serialize;

use crate::domain::config::DatabaseConfig;
use crate::domain::derivation;
use crate::domain::manifest::SecretUpdate;
use crate::domain::placeholder::ReplacementInstruction;
use crate::domain::{AppError, RunSecrets, Secret, TargetId};

pub const HYDRA_SYSTEM_1_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_STRING_1";
pub const HYDRA_SYSTEM_2_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_STRING_2";
pub const HYDRA_COOKIE_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_COOKIE_SECRET";
pub const HYDRA_SALT_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_SALT_STRING";
pub const KRATOS_COOKIE_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_KRATOS_COOKIE_SECRET";
pub const KRATOS_CIPHER_PLACEHOLDER: &str = "CHANGE_THIS_TO_A_SECURE_RANDOM_KRATOS_CIPHER_SECRET";

/// Placeholder instructions for a text config target. Empty for other kinds.
pub fn text_instructions(target: TargetId, secrets: &RunSecrets) -> Vec<ReplacementInstruction> {
    match target {
        TargetId::HydraConfig => vec![
            ReplacementInstruction::new(
                "secrets.system[0]",
                HYDRA_SYSTEM_1_PLACEHOLDER,
                &secrets.hydra_system_1,
            ),
            ReplacementInstruction::new(
                "secrets.system[1]",
                HYDRA_SYSTEM_2_PLACEHOLDER,
                &secrets.hydra_system_2,
            ),
            ReplacementInstruction::new(
                "secrets.cookie[0]",
                HYDRA_COOKIE_PLACEHOLDER,
                &secrets.hydra_cookie,
            ),
            ReplacementInstruction::new(
                "oidc.subject_identifiers.pairwise.salt",
                HYDRA_SALT_PLACEHOLDER,
                &secrets.hydra_pairwise_salt,
            ),
        ],
        TargetId::KratosConfig => vec![
            ReplacementInstruction::new(
                "secrets.cookie[0]",
                KRATOS_COOKIE_PLACEHOLDER,
                &secrets.kratos_cookie,
            ),
            ReplacementInstruction::new(
                "secrets.cipher[0]",
                KRATOS_CIPHER_PLACEHOLDER,
                &secrets.kratos_cipher,
            ),
        ],
        _ => Vec::new(),
    }
}

/// Explicit `stringData` updates for a manifest target. Empty for other kinds.
pub fn manifest_updates(target: TargetId, secrets: &RunSecrets) -> Vec<SecretUpdate> {
    let update = |key, value: &Secret| SecretUpdate { key, value: value.clone() };
    match target {
        TargetId::HydraSecret => vec![
            update("HYDRA_SECRETS_SYSTEM", &secrets.hydra_system_1),
            update("HYDRA_SECRETS_COOKIE", &secrets.hydra_cookie),
            update("HYDRA_OIDC_PAIRWISE_SALT", &secrets.hydra_pairwise_salt),
        ],
        TargetId::KratosSecret => vec![
            update("KRATOS_SECRETS_COOKIE", &secrets.kratos_cookie),
            update("KRATOS_SECRETS_CIPHER", &secrets.kratos_cipher),
        ],
        TargetId::PostgresSecret => vec![
            update("POSTGRES_PASSWORD", &secrets.database_password),
            update("POSTGRES_ROOT_PASSWORD", &secrets.database_password),
        ],
        _ => Vec::new(),
    }
}

/// Values substituted into default templates before the update pass.
///
/// Secret placeholders are deliberately absent: templates keep their literal
/// `CHANGE_THIS_...` markers, which the normal update pass then replaces.
#[derive(Clone, Serialize)]
pub struct TemplateContext {
    pub hydra_dsn: String,
    pub kratos_dsn: String,
    pub database: DatabaseConfig,
}

impl TemplateContext {
    pub fn new(secrets: &RunSecrets, database: &DatabaseConfig) -> Result<Self, AppError> {
        Ok(Self {
            hydra_dsn: derivation::hydra_dsn(secrets, database)?,
            kratos_dsn: derivation::kratos_dsn(secrets, database)?,
            database: database.clone(),
        })
    }
}

/// Full content of the env file. Never merged with previous content.
pub fn render_env_file(secrets: &RunSecrets) -> String {
    format!("POSTGRES_PASSWORD={}\n", secrets.database_password.expose())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> RunSecrets {
        let mut n = 0u8;
        RunSecrets::generate(|len| {
            n += 1;
            Secret::from_bytes(&vec![n; len])
        })
        .unwrap()
    }

    #[test]
    fn text_placeholders_are_distinct() {
        let secrets = secrets();
        for target in [TargetId::HydraConfig, TargetId::KratosConfig] {
            let instructions = text_instructions(target, &secrets);
            let mut literals: Vec<_> =
                instructions.iter().map(|i| i.placeholder.as_str()).collect();
            literals.sort();
            literals.dedup();
            assert_eq!(literals.len(), instructions.len());
        }
    }

    #[test]
    fn kratos_cipher_is_thirty_two_characters() {
        let secrets = secrets();
        let instructions = text_instructions(TargetId::KratosConfig, &secrets);
        let cipher = instructions.iter().find(|i| i.name == "secrets.cipher[0]").unwrap();
        assert_eq!(cipher.value.expose().len(), 32);
    }

    #[test]
    fn non_text_targets_have_no_instructions() {
        assert!(text_instructions(TargetId::HydraSecret, &secrets()).is_empty());
        assert!(manifest_updates(TargetId::HydraConfig, &secrets()).is_empty());
    }

    #[test]
    fn postgres_alias_shares_the_database_password() {
        let secrets = secrets();
        let updates = manifest_updates(TargetId::PostgresSecret, &secrets);
        assert!(updates.iter().all(|u| u.value == secrets.database_password));
    }

    #[test]
    fn env_file_is_a_single_terminated_line() {
        let secrets = secrets();
        let content = render_env_file(&secrets);
        assert_eq!(content, format!("POSTGRES_PASSWORD={}\n", secrets.database_password.expose()));
        assert_eq!(content.lines().count(), 1);
    }
}
