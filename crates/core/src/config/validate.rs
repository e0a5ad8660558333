use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Provider credentials are present (missing API key is fatal at startup)
/// - Server port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.provider.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.base_url cannot be empty".to_string(),
        ));
    }

    if config.provider.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.api_key is required".to_string(),
        ));
    }

    Ok(())
}
