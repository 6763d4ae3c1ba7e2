//! Deterministic `SecretSource` doubles.

use std::cell::Cell;

use crate::domain::{AppError, Secret};
use crate::ports::SecretSource;

/// Yields `[n; len]` for the n-th call, so two fresh instances produce identical runs.
#[derive(Debug, Default)]
pub struct SequenceSecretSource {
    calls: Cell<u8>,
}

impl SequenceSecretSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence at a different byte so runs differ.
    pub fn starting_at(first: u8) -> Self {
        Self { calls: Cell::new(first.wrapping_sub(1)) }
    }
}

impl SecretSource for SequenceSecretSource {
    fn generate(&self, length_bytes: usize) -> Result<Secret, AppError> {
        let n = self.calls.get().wrapping_add(1);
        self.calls.set(n);
        Secret::from_bytes(&vec![n; length_bytes])
    }
}

/// A source whose randomness device is gone.
#[derive(Debug, Default)]
pub struct UnavailableSecretSource;

impl SecretSource for UnavailableSecretSource {
    fn generate(&self, _length_bytes: usize) -> Result<Secret, AppError> {
        Err(AppError::EntropyUnavailable("mock entropy source offline".to_string()))
    }
}
