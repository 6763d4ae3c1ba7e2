mod scripted_confirmation;
mod secret_source_stub;
mod test_files;
mod test_repository_fs;

pub use self::scripted_confirmation::ScriptedConfirmation;
pub use self::secret_source_stub::{SequenceSecretSource, UnavailableSecretSource};
pub use self::test_files::TestFiles;
pub use self::test_repository_fs::MockRepositoryFs;
