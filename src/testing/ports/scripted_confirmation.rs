//! `RepairConfirmation` double that records prompts.

use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::RepairConfirmation;

#[derive(Debug)]
pub struct ScriptedConfirmation {
    answer: Result<bool, String>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self { answer: Ok(answer), prompts: RefCell::new(Vec::new()) }
    }

    /// Every prompt fails, like dialoguer without a terminal.
    pub fn failing(reason: &str) -> Self {
        Self { answer: Err(reason.to_string()), prompts: RefCell::new(Vec::new()) }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl RepairConfirmation for ScriptedConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.clone().map_err(AppError::Prompt)
    }
}
