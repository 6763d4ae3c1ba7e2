//! Secret values generated for a single run.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::domain::AppError;

/// Entropy for secrets consumed as opaque strings (system, cookie, salt).
pub const LONG_SECRET_BYTES: usize = 32;

/// Entropy for the identity-server cipher key, which must be exactly 32 characters.
pub const CIPHER_SECRET_BYTES: usize = 16;

/// Entropy for the database password.
pub const DATABASE_PASSWORD_BYTES: usize = 16;

/// Upper bound on a single secret.
pub const MAX_SECRET_BYTES: usize = 4096;

/// Whether `length_bytes` can be generated as one secret.
pub fn is_valid_length(length_bytes: usize) -> bool {
    (1..=MAX_SECRET_BYTES).contains(&length_bytes)
}

/// Lowercase hex encoding of random bytes.
///
/// The value is only reachable through [`Secret::expose`]; `Debug` prints a
/// fingerprint so secrets never leak into logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Encode raw random bytes as a secret.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.is_empty() {
            return Err(AppError::InvalidSecretLength(0));
        }
        Ok(Self(hex::encode(bytes)))
    }

    /// Wrap an already hex-encoded value.
    pub fn from_hex(value: &str) -> Result<Self, AppError> {
        let decoded = hex::decode(value)
            .map_err(|err| AppError::config_error(format!("Secret is not valid hex: {}", err)))?;
        Self::from_bytes(&decoded)?;
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Number of random bytes behind the hex string.
    pub fn len_bytes(&self) -> usize {
        self.0.len() / 2
    }

    /// Short SHA-256 prefix, safe to print.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(digest)[..12].to_string()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(sha256:{})", self.fingerprint())
    }
}

/// Every secret needed by one invocation, generated before any file is touched.
#[derive(Debug, Clone)]
pub struct RunSecrets {
    pub hydra_system_1: Secret,
    pub hydra_system_2: Secret,
    pub hydra_cookie: Secret,
    pub hydra_pairwise_salt: Secret,
    pub kratos_cookie: Secret,
    pub kratos_cipher: Secret,
    pub database_password: Secret,
}

impl RunSecrets {
    /// Draw a full generation of secrets from `generate`.
    ///
    /// The first failure aborts the whole generation; no partial set is returned.
    pub fn generate<F>(mut generate: F) -> Result<Self, AppError>
    where
        F: FnMut(usize) -> Result<Secret, AppError>,
    {
        Ok(Self {
            hydra_system_1: generate(LONG_SECRET_BYTES)?,
            hydra_system_2: generate(LONG_SECRET_BYTES)?,
            hydra_cookie: generate(LONG_SECRET_BYTES)?,
            hydra_pairwise_salt: generate(LONG_SECRET_BYTES)?,
            kratos_cookie: generate(LONG_SECRET_BYTES)?,
            kratos_cipher: generate(CIPHER_SECRET_BYTES)?,
            database_password: generate(DATABASE_PASSWORD_BYTES)?,
        })
    }
}
