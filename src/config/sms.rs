//! SMS configuration (Africa's Talking)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// SMS provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    /// Africa's Talking username (`sandbox` in sandbox mode)
    #[serde(default)]
    pub username: String,

    /// Africa's Talking API key
    pub api_key: Option<SecretString>,

    /// Registered sender id or short code
    pub sender_id: Option<String>,

    /// Target the sandbox host
    #[serde(default)]
    pub sandbox: bool,

    /// Overrides the host derived from `sandbox`
    pub base_url: Option<String>,

    /// Provider request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl SmsConfig {
    /// True when both username and API key are present.
    pub fn is_configured(&self) -> bool {
        !self.username.trim().is_empty() && self.has_api_key()
    }

    fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate SMS configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_username = !self.username.trim().is_empty();
        if has_username != self.has_api_key() {
            return Err(ValidationError::IncompleteSmsCredentials);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidSmsBaseUrl);
            }
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_key: None,
            sender_id: None,
            sandbox: false,
            base_url: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> SmsConfig {
        SmsConfig {
            username: "sandbox".to_string(),
            api_key: Some(SecretString::new("atsk_xxx".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_unconfigured_is_valid() {
        let config = SmsConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configured() {
        assert!(configured().is_configured());
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_username_without_key() {
        let config = SmsConfig {
            api_key: None,
            ..configured()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::IncompleteSmsCredentials)
        );
    }

    #[test]
    fn test_key_without_username() {
        let config = SmsConfig {
            username: String::new(),
            ..configured()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::IncompleteSmsCredentials)
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = SmsConfig {
            base_url: Some("api.africastalking.com".to_string()),
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSmsBaseUrl));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let rendered = format!("{:?}", configured());
        assert!(!rendered.contains("atsk_xxx"));
    }
}
