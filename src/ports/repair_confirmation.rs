use crate::domain::AppError;

/// Port for the yes/no decision that gates overwriting an unusable file.
pub trait RepairConfirmation {
    /// Ask whether the file may be replaced. `Ok(false)` is a deliberate decline.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}
