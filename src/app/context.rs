use crate::ports::{RepairConfirmation, RepositoryFilesystem, SecretSource, TemplateCatalog};

/// Application context holding dependencies for command execution.
pub struct AppContext<F, S, C, T>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    files: F,
    secrets: S,
    confirmation: C,
    templates: T,
}

impl<F, S, C, T> AppContext<F, S, C, T>
where
    F: RepositoryFilesystem,
    S: SecretSource,
    C: RepairConfirmation,
    T: TemplateCatalog,
{
    /// Create a new application context.
    pub fn new(files: F, secrets: S, confirmation: C, templates: T) -> Self {
        Self { files, secrets, confirmation, templates }
    }

    /// Get a reference to the repository filesystem.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a reference to the secret source.
    pub fn secrets(&self) -> &S {
        &self.secrets
    }

    /// Get a reference to the repair decision.
    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }

    /// Get a reference to the default template catalog.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
