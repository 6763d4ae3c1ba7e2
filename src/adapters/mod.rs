pub mod assets;
pub mod confirmation;
pub mod filesystem;
pub mod os_secret_source;

pub use assets::EmbeddedTemplateCatalog;
pub use confirmation::ConfirmationPolicy;
pub use filesystem::FilesystemStore;
pub use os_secret_source::OsSecretSource;
