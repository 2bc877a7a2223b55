use crate::config::types::{Config, HttpConfig};
use crate::ConfigError;

const MAX_TIMEOUT_SECS: u64 = 600;
const MAX_REDIRECTS: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain control characters, got '{}'",
            config.user_agent.escape_debug()
        )));
    }

    if config.timeout < 1 || config.timeout > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout must be between 1 and {} seconds, got {}",
            MAX_TIMEOUT_SECS, config.timeout
        )));
    }

    if config.connect_timeout < 1 || config.connect_timeout > config.timeout {
        return Err(ConfigError::Validation(format!(
            "connect-timeout must be between 1 and timeout ({}s), got {}",
            config.timeout, config.connect_timeout
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    Ok(())
}
