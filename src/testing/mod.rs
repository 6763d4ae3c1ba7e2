pub mod ports;

pub use ports::{
    MockRepositoryFs, ScriptedConfirmation, SequenceSecretSource, TestFiles,
    UnavailableSecretSource,
};
