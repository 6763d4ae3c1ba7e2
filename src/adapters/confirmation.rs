//! `RepairConfirmation` adapter.

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::RepairConfirmation;

/// How repair prompts are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationPolicy {
    /// Ask on the terminal. Defaults to "no" so a stray Enter never overwrites a file.
    #[default]
    Interactive,
    /// Approve every repair (`--yes`).
    AssumeYes,
    /// Decline every repair (`--no-input`).
    AssumeNo,
}

impl RepairConfirmation for ConfirmationPolicy {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        match self {
            ConfirmationPolicy::Interactive => Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|err| AppError::Prompt(format!("Failed to read confirmation: {}", err))),
            ConfirmationPolicy::AssumeYes => {
                tracing::debug!(prompt, "repair approved by --yes");
                Ok(true)
            }
            ConfirmationPolicy::AssumeNo => {
                tracing::debug!(prompt, "repair declined by --no-input");
                Ok(false)
            }
        }
    }
}
