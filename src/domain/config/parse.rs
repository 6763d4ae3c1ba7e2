//! Pure parse/validate for seed configuration (`authseed.toml`).

use crate::domain::AppError;

use super::SeedConfig;

/// Parse and validate seed configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<SeedConfig, AppError> {
    let config: SeedConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
