//! Kubernetes Secret manifests updated through their `stringData` mapping.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, Secret};

const STRING_DATA: &str = "stringData";

/// Why a manifest cannot be updated as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestDefect {
    /// The text is not valid YAML.
    Unparsable(String),
    /// The file holds this many YAML documents instead of one Secret.
    MultipleDocuments(usize),
    /// The document root is not a mapping.
    NotAMapping,
    /// `stringData` is absent or not a mapping.
    MissingStringData,
}

impl ManifestDefect {
    pub fn describe(&self) -> String {
        match self {
            ManifestDefect::Unparsable(reason) => format!("not valid YAML ({})", reason),
            ManifestDefect::MultipleDocuments(count) => format!(
                "contains {} YAML documents; replacing it keeps only the Secret and drops the others",
                count
            ),
            ManifestDefect::NotAMapping => "document root is not a mapping".to_string(),
            ManifestDefect::MissingStringData => {
                "'stringData' section is missing or not a mapping".to_string()
            }
        }
    }
}

/// An explicit key to set to a freshly generated secret.
#[derive(Debug, Clone)]
pub struct SecretUpdate {
    pub key: &'static str,
    pub value: Secret,
}

/// A value computed from this run's secrets, re-checked on every update.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedValue {
    pub key: &'static str,
    pub value: String,
}

impl std::fmt::Debug for DerivedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Derived values embed secrets.
        f.debug_struct("DerivedValue").field("key", &self.key).finish_non_exhaustive()
    }
}

/// What an update pass did to a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestReport {
    /// Keys whose value was written, in the order they were written.
    pub changed: Vec<String>,
    /// Explicit keys absent from `stringData` that could not be managed.
    pub unmanaged: Vec<String>,
}

impl ManifestReport {
    pub fn is_dirty(&self) -> bool {
        !self.changed.is_empty()
    }

    fn mark_changed(&mut self, key: &str) {
        if !self.changed.iter().any(|k| k == key) {
            self.changed.push(key.to_string());
        }
    }
}

/// A parsed Secret manifest with a usable `stringData` mapping.
#[derive(Debug, Clone)]
pub struct SecretManifest {
    root: Mapping,
}

impl SecretManifest {
    pub fn parse(content: &str) -> Result<Self, ManifestDefect> {
        let value: Value = serde_yaml::from_str(content).map_err(|err| {
            match count_documents(content) {
                Some(count) if count > 1 => ManifestDefect::MultipleDocuments(count),
                _ => ManifestDefect::Unparsable(err.to_string()),
            }
        })?;

        let Value::Mapping(root) = value else {
            return Err(ManifestDefect::NotAMapping);
        };

        match root.get(STRING_DATA) {
            Some(Value::Mapping(_)) => Ok(Self { root }),
            _ => Err(ManifestDefect::MissingStringData),
        }
    }

    /// Current `stringData` value of `key`, rendered as a string.
    pub fn get(&self, key: &str) -> Option<String> {
        self.root
            .get(STRING_DATA)
            .and_then(Value::as_mapping)
            .and_then(|data| data.get(key))
            .and_then(scalar_string)
    }

    /// Apply explicit updates, then re-derive every derived value.
    ///
    /// An explicit key missing from `stringData` is only inserted when it is
    /// also a derived key; otherwise it is reported as unmanaged. Derived keys
    /// are written whenever their current value differs, including when absent.
    pub fn apply(
        &mut self,
        updates: &[SecretUpdate],
        derived: &[DerivedValue],
    ) -> Result<ManifestReport, AppError> {
        let data = self
            .root
            .get_mut(STRING_DATA)
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| AppError::Internal("stringData vanished after parse".to_string()))?;

        let mut report = ManifestReport::default();

        for update in updates {
            let new_value = update.value.expose();
            match data.get(update.key).map(scalar_string) {
                Some(Some(current)) if current == new_value => {
                    tracing::debug!(key = update.key, "stringData key already current");
                }
                Some(_) => {
                    data.insert(Value::from(update.key), Value::from(new_value));
                    report.mark_changed(update.key);
                }
                None if derived.iter().any(|d| d.key == update.key) => {
                    data.insert(Value::from(update.key), Value::from(new_value));
                    report.mark_changed(update.key);
                }
                None => {
                    tracing::warn!(key = update.key, "stringData key not present; skipping");
                    report.unmanaged.push(update.key.to_string());
                }
            }
        }

        for rule in derived {
            let current = data.get(rule.key).and_then(scalar_string);
            if current.as_deref() != Some(rule.value.as_str()) {
                data.insert(Value::from(rule.key), Value::from(rule.value.as_str()));
                report.mark_changed(rule.key);
            }
        }

        Ok(report)
    }

    pub fn to_yaml(&self, path: &str) -> Result<String, AppError> {
        serde_yaml::to_string(&self.root).map_err(|err| AppError::YamlSerialize {
            path: path.to_string(),
            details: err.to_string(),
        })
    }
}

/// Number of documents in a multi-document stream, or `None` if any is invalid.
fn count_documents(content: &str) -> Option<usize> {
    serde_yaml::Deserializer::from_str(content)
        .map(Value::deserialize)
        .collect::<Result<Vec<_>, _>>()
        .ok()
        .map(|documents| documents.len())
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
