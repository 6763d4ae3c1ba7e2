//! Placeholder replacement for hand-authored YAML treated as opaque text.
//!
//! Each instruction names a quoted placeholder literal. The literal is located
//! either as a list item (`- "PLACEHOLDER"`) or as a direct scalar value
//! (`key: "PLACEHOLDER"`, `- key: "PLACEHOLDER"`, or the quoted value on the
//! line after `key:`). Only the quoted literal is rewritten; indentation,
//! dashes, keys and comments around it are preserved byte for byte.

use regex::{Captures, Regex};

use crate::domain::{AppError, Secret};

/// One placeholder-to-secret mapping scoped to a single file.
#[derive(Debug, Clone)]
pub struct ReplacementInstruction {
    /// Dotted YAML path, e.g. `secrets.system[0]` or `oidc.subject_identifiers.pairwise.salt`.
    pub name: String,
    /// Literal text between the quotes. Never interpreted as a pattern.
    pub placeholder: String,
    pub value: Secret,
}

impl ReplacementInstruction {
    pub fn new(name: &str, placeholder: &str, value: &Secret) -> Self {
        Self { name: name.to_string(), placeholder: placeholder.to_string(), value: value.clone() }
    }

    /// Mapping key used by the direct-value form: the last path segment without its index.
    pub fn key(&self) -> &str {
        let last = self.name.rsplit('.').next().unwrap_or(&self.name);
        last.split('[').next().unwrap_or(last)
    }
}

/// Which textual form an instruction matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchForm {
    ListItem,
    DirectValue,
}

/// Result of patching one file's content.
#[derive(Debug, Clone)]
pub struct PlaceholderPatch {
    pub content: String,
    /// Per instruction, in input order: the form that matched, if any.
    pub applied: Vec<Option<MatchForm>>,
}

impl PlaceholderPatch {
    pub fn changed(&self) -> bool {
        self.applied.iter().any(Option::is_some)
    }

    /// Names of the instructions that replaced something.
    pub fn applied_names<'a>(&self, instructions: &'a [ReplacementInstruction]) -> Vec<&'a str> {
        instructions
            .iter()
            .zip(&self.applied)
            .filter(|(_, applied)| applied.is_some())
            .map(|(instruction, _)| instruction.name.as_str())
            .collect()
    }
}

/// Replace every placeholder named by `instructions` in `content`.
///
/// The list-item form is tried first; the direct-value form is only tried when
/// the list-item form found nothing. Every occurrence of the matching form is
/// replaced. A placeholder that does not occur leaves the content untouched.
pub fn replace_placeholders(
    content: &str,
    instructions: &[ReplacementInstruction],
) -> Result<PlaceholderPatch, AppError> {
    let mut content = content.to_string();
    let mut applied = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        let literal = regex::escape(&instruction.placeholder);
        let list_item = compile(&format!(r#"(?m)^([ \t]*-[ \t]*)"{}""#, literal))?;
        let direct_value = compile(&format!(
            r#"(?m)^([ \t]*(?:-[ \t]+)?{}:\s*)"{}""#,
            regex::escape(instruction.key()),
            literal
        ))?;

        let form = if list_item.is_match(&content) {
            content = substitute(&list_item, &content, instruction.value.expose());
            Some(MatchForm::ListItem)
        } else if direct_value.is_match(&content) {
            content = substitute(&direct_value, &content, instruction.value.expose());
            Some(MatchForm::DirectValue)
        } else {
            None
        };

        tracing::debug!(name = %instruction.name, form = ?form, "placeholder evaluated");
        applied.push(form);
    }

    Ok(PlaceholderPatch { content, applied })
}

fn compile(pattern: &str) -> Result<Regex, AppError> {
    Regex::new(pattern)
        .map_err(|err| AppError::Internal(format!("Invalid placeholder pattern: {}", err)))
}

fn substitute(pattern: &Regex, content: &str, value: &str) -> String {
    pattern
        .replace_all(content, |caps: &Captures<'_>| format!("{}\"{}\"", &caps[1], value))
        .into_owned()
}
