//! Phone number value object normalized to E.164.
//!
//! USSD gateways are inconsistent about number formatting: the same handset
//! can arrive as `+254712345678`, `254712345678`, `00254712345678` or the
//! national `0712345678`. Everything is stored and compared in the `+`
//! prefixed international form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// A phone number in international (E.164) format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalizes a raw phone number.
    ///
    /// `default_country_code` (digits only, e.g. `"254"`) replaces the national
    /// trunk prefix `0`.
    pub fn parse(raw: &str, default_country_code: &str) -> Result<Self, ValidationError> {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if cleaned.is_empty() {
            return Err(ValidationError::empty_field("phone_number"));
        }

        let digits = if let Some(rest) = cleaned.strip_prefix('+') {
            rest.to_string()
        } else if let Some(rest) = cleaned.strip_prefix("00") {
            rest.to_string()
        } else if let Some(rest) = cleaned.strip_prefix('0') {
            format!("{}{}", default_country_code, rest)
        } else {
            cleaned
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "phone_number",
                "must contain only digits after an optional '+'",
            ));
        }

        if digits.len() < MIN_DIGITS || digits.len() > MAX_DIGITS {
            return Err(ValidationError::out_of_range(
                "phone_number",
                MIN_DIGITS as i64,
                MAX_DIGITS as i64,
                digits.len() as i64,
            ));
        }

        Ok(Self(format!("+{}", digits)))
    }

    /// Returns the normalized `+`-prefixed form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
