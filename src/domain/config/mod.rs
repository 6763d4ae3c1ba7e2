pub mod parse;
pub mod paths;
mod seed_config;

pub use parse::parse_config_content;
pub use seed_config::{DatabaseAccount, DatabaseConfig, DeploymentTarget, PathsConfig, SeedConfig};
