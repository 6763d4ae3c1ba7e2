//! Values derived from this run's secrets, keyed by target file.
//!
//! Rules are evaluated after explicit updates on every run, whether or not the
//! explicit update list mentions their key, so a new database password always
//! reaches every connection string.

use url::Url;

use crate::domain::config::{DatabaseAccount, DatabaseConfig};
use crate::domain::manifest::DerivedValue;
use crate::domain::{AppError, RunSecrets, TargetId};

/// A key whose value is computed rather than generated.
pub struct DerivationRule {
    pub target: TargetId,
    pub key: &'static str,
    pub derive: fn(&RunSecrets, &DatabaseConfig) -> Result<String, AppError>,
}

pub const DERIVATION_RULES: &[DerivationRule] = &[
    DerivationRule { target: TargetId::HydraSecret, key: "HYDRA_DSN", derive: hydra_dsn },
    DerivationRule { target: TargetId::KratosSecret, key: "KRATOS_DSN", derive: kratos_dsn },
];

/// Evaluate every rule registered for `target`.
pub fn derived_values(
    target: TargetId,
    secrets: &RunSecrets,
    database: &DatabaseConfig,
) -> Result<Vec<DerivedValue>, AppError> {
    DERIVATION_RULES
        .iter()
        .filter(|rule| rule.target == target)
        .map(|rule| Ok(DerivedValue { key: rule.key, value: (rule.derive)(secrets, database)? }))
        .collect()
}

pub fn hydra_dsn(secrets: &RunSecrets, database: &DatabaseConfig) -> Result<String, AppError> {
    connection_string(database, &database.hydra, secrets.database_password.expose())
}

pub fn kratos_dsn(secrets: &RunSecrets, database: &DatabaseConfig) -> Result<String, AppError> {
    connection_string(database, &database.kratos, secrets.database_password.expose())
}

/// `postgres://<user>:<password>@<host>:<port>/<db>?<options>`
pub fn connection_string(
    database: &DatabaseConfig,
    account: &DatabaseAccount,
    password: &str,
) -> Result<String, AppError> {
    let invalid =
        |what: &str| AppError::InvalidConfig(format!("Cannot build DSN: invalid {}", what));

    let mut url = Url::parse(&format!("postgres://{}:{}", database.host, database.port))
        .map_err(|_| invalid("database host"))?;
    url.set_username(&account.user).map_err(|_| invalid("database user"))?;
    url.set_password(Some(password)).map_err(|_| invalid("database password"))?;
    url.set_path(&format!("/{}", account.name));
    if !database.options.is_empty() {
        url.set_query(Some(&database.options));
    }
    Ok(url.to_string())
}
