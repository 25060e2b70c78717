//! Listener settings for the USSD callback endpoint.
//!
//! The gateway abandons a session when a callback answers slowly, so the
//! per-request timeout is bounded well below a typical web default.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

/// `server.*` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// Filter directive handed to `EnvFilter` when `RUST_LOG` is unset.
    pub log_level: String,

    /// Time allowed for one callback, decode to reply.
    pub request_timeout_secs: u64,
}

/// Deployment stage. Production refuses the development bypass.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,renti=debug,sqlx=warn".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces_with_short_timeout() {
        let config = ServerConfig::default();

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_section_keeps_remaining_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port":3000,"environment":"production"}"#).unwrap();

        assert_eq!(config.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn unparseable_host_is_reported_by_name() {
        let config = ServerConfig {
            host: "ussd gateway".to_string(),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidHost("ussd gateway".to_string()))
        );
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn timeout_must_fit_a_gateway_round_trip() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }

        let config = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
