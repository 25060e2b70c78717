//! USSD menu configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::application::UssdSettings;
use crate::domain::foundation::{is_currency_code, PhoneNumber};

/// USSD dispatcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UssdConfig {
    /// Only this service code is served when set
    pub expected_service_code: Option<String>,

    /// Digits replacing a national `0` prefix
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// Currency for balances with no recorded amount
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Auto-provision `dev_bypass_number` as a tenant
    #[serde(default)]
    pub dev_bypass_enabled: bool,

    /// Number treated as registered when the bypass is enabled
    pub dev_bypass_number: Option<String>,
}

impl UssdConfig {
    /// Validate USSD configuration against the running environment
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let code = &self.default_country_code;
        if code.is_empty() || code.len() > 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidCountryCode);
        }
        if !is_currency_code(&self.currency) {
            return Err(ValidationError::InvalidCurrency);
        }
        if self.dev_bypass_enabled {
            if *environment == Environment::Production {
                return Err(ValidationError::BypassInProduction);
            }
            self.bypass_number()?;
        }
        Ok(())
    }

    fn bypass_number(&self) -> Result<Option<PhoneNumber>, ValidationError> {
        if !self.dev_bypass_enabled {
            return Ok(None);
        }
        let raw = self
            .dev_bypass_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(ValidationError::MissingRequired("USSD__DEV_BYPASS_NUMBER"))?;
        PhoneNumber::parse(raw, &self.default_country_code)
            .map(Some)
            .map_err(|e| ValidationError::InvalidBypassNumber(e.to_string()))
    }

    /// Dispatcher settings derived from this section.
    pub fn settings(&self) -> Result<UssdSettings, ValidationError> {
        Ok(UssdSettings {
            expected_service_code: self
                .expected_service_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string),
            default_country_code: self.default_country_code.clone(),
            currency: self.currency.clone(),
            dev_bypass: self.bypass_number()?,
        })
    }
}

impl Default for UssdConfig {
    fn default() -> Self {
        Self {
            expected_service_code: None,
            default_country_code: default_country_code(),
            currency: default_currency(),
            dev_bypass_enabled: false,
            dev_bypass_number: None,
        }
    }
}

fn default_country_code() -> String {
    "254".to_string()
}

fn default_currency() -> String {
    "KES".to_string()
}
