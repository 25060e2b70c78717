//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("SMS username and API key must be configured together")]
    IncompleteSmsCredentials,

    #[error("SMS base URL must start with http:// or https://")]
    InvalidSmsBaseUrl,

    #[error("Country code must be 1 to 3 digits")]
    InvalidCountryCode,

    #[error("Currency must be a three-letter uppercase code")]
    InvalidCurrency,

    #[error("Invalid development bypass number: {0}")]
    InvalidBypassNumber(String),

    #[error("Development bypass cannot be enabled in production")]
    BypassInProduction,
}
