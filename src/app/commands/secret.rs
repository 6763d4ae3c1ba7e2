//! The `secret` command: print one freshly generated secret.

use crate::domain::secret::is_valid_length;
use crate::domain::{AppError, Secret};
use crate::ports::SecretSource;

/// Default byte length, matching the long secrets the seed command writes.
pub const DEFAULT_SECRET_BYTES: usize = crate::domain::secret::LONG_SECRET_BYTES;

/// Execute the secret command.
pub fn execute<S: SecretSource>(source: &S, length_bytes: usize) -> Result<Secret, AppError> {
    if !is_valid_length(length_bytes) {
        return Err(AppError::InvalidSecretLength(length_bytes));
    }
    source.generate(length_bytes)
}
