//! `SecretSource` backed by the operating system CSPRNG.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::domain::secret::is_valid_length;
use crate::domain::{AppError, Secret};
use crate::ports::SecretSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretSource;

impl SecretSource for OsSecretSource {
    fn generate(&self, length_bytes: usize) -> Result<Secret, AppError> {
        if !is_valid_length(length_bytes) {
            return Err(AppError::InvalidSecretLength(length_bytes));
        }
        let mut bytes = vec![0u8; length_bytes];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| AppError::EntropyUnavailable(err.to_string()))?;
        Secret::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_hex_of_requested_length() {
        let secret = OsSecretSource.generate(32).unwrap();
        assert_eq!(secret.expose().len(), 64);
        assert!(secret.expose().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn consecutive_secrets_differ() {
        let a = OsSecretSource.generate(16).unwrap();
        let b = OsSecretSource.generate(16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(OsSecretSource.generate(0), Err(AppError::InvalidSecretLength(0))));
    }

    #[test]
    fn oversized_length_is_rejected_without_allocating() {
        let result = OsSecretSource.generate(usize::MAX);
        assert!(matches!(result, Err(AppError::InvalidSecretLength(usize::MAX))));
    }
}
