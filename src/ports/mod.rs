mod repair_confirmation;
mod repository_filesystem;
mod secret_source;
mod template_catalog;

pub use repair_confirmation::RepairConfirmation;
pub use repository_filesystem::RepositoryFilesystem;
pub use secret_source::SecretSource;
pub use template_catalog::TemplateCatalog;
