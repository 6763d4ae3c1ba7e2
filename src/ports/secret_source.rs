use crate::domain::{AppError, Secret};

/// Port for drawing secrets from a cryptographically secure source.
pub trait SecretSource {
    /// Generate `length_bytes` random bytes, hex-encoded.
    ///
    /// Fails with `AppError::InvalidSecretLength` for zero or more than
    /// `MAX_SECRET_BYTES`, and with `AppError::EntropyUnavailable` when the
    /// source cannot deliver. Callers must not retry.
    fn generate(&self, length_bytes: usize) -> Result<Secret, AppError>;
}
