//! Default locations of every file authseed manages, relative to the root.

/// `authseed.toml`
pub const CONFIG_FILE: &str = "authseed.toml";

pub const HYDRA_CONFIG: &str = "config/hydra/hydra.yml";
pub const KRATOS_CONFIG: &str = "config/kratos/kratos.yml";
pub const HYDRA_SECRET: &str = "k8s/hydra/hydra-secrets.yaml";
pub const KRATOS_SECRET: &str = "k8s/kratos/kratos-secrets.yaml";
pub const POSTGRES_SECRET: &str = "k8s/postgres/postgres-secrets.yaml";
pub const DOTENV: &str = ".env";
