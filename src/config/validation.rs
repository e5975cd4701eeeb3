//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Maximum allowed retry count.
pub const MAX_RETRIES: u32 = 10;

/// Maximum allowed rate-limit window in seconds (1 hour).
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `ANTHROPIC_API_KEY` must not be empty
/// - `BIND_ADDR` must parse as a socket address
/// - `REQUEST_TIMEOUT_MS` must be between 1000 and 300000
/// - `MAX_RETRIES` must be between 0 and 10
/// - `RATE_LIMIT_MAX_REQUESTS` must be at least 1
/// - `RATE_LIMIT_WINDOW_SECS` must be between 1 and 3600
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api_key.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "ANTHROPIC_API_KEY".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.bind_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::InvalidValue {
            var: "BIND_ADDR".into(),
            reason: "must be a socket address like 127.0.0.1:8080".into(),
        });
    }

    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.max_retries > MAX_RETRIES {
        return Err(ConfigError::InvalidValue {
            var: "MAX_RETRIES".into(),
            reason: format!("must be between 0 and {MAX_RETRIES}"),
        });
    }

    if config.rate_limit_max_requests == 0 {
        return Err(ConfigError::InvalidValue {
            var: "RATE_LIMIT_MAX_REQUESTS".into(),
            reason: "must be at least 1".into(),
        });
    }

    if config.rate_limit_window_secs == 0
        || config.rate_limit_window_secs > MAX_RATE_LIMIT_WINDOW_SECS
    {
        return Err(ConfigError::InvalidValue {
            var: "RATE_LIMIT_WINDOW_SECS".into(),
            reason: format!("must be between 1 and {MAX_RATE_LIMIT_WINDOW_SECS}"),
        });
    }

    Ok(())
}
