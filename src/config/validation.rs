use crate::config::types::{BatchConfig, Config, FetcherConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_batch_config(&config.batch)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_ms < 100 || config.timeout_ms > 120_000 {
        return Err(ConfigError::Validation(format!(
            "timeout-ms must be between 100 and 120000, got {}",
            config.timeout_ms
        )));
    }

    if config.max_redirects > 50 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 50, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}

/// Validates batch configuration
fn validate_batch_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if config.window_size < 1 || config.window_size > 1000 {
        return Err(ConfigError::Validation(format!(
            "window-size must be between 1 and 1000, got {}",
            config.window_size
        )));
    }

    Ok(())
}
