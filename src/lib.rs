//! authseed: Generate secrets for Hydra, Kratos and PostgreSQL and inject them
//! into config files, Kubernetes Secret manifests and `.env`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::ConfirmationPolicy;
pub use app::api::{DEFAULT_SECRET_BYTES, SeedOptions, generate_secret, seed, seed_at};
pub use domain::{
    AppError, DeploymentTarget, ExitStatus, FileReport, FileStatus, RunSummary, Secret, TargetId,
};
