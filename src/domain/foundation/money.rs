//! Money value object in minor currency units.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An amount in minor units (cents) with its ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount_minor: i64,
    currency: String,
}

impl Money {
    /// Creates an amount, validating the currency code shape.
    pub fn new(amount_minor: i64, currency: impl Into<String>) -> Result<Self, ValidationError> {
        let currency = currency.into();
        if !is_currency_code(&currency) {
            return Err(ValidationError::invalid_format(
                "currency",
                "must be three uppercase letters",
            ));
        }
        Ok(Self {
            amount_minor,
            currency,
        })
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(0, currency)
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Checks for a three letter uppercase ISO 4217 style code.
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

impl fmt::Display for Money {
    /// Renders as `KES 12,000.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let major = (abs / 100).to_string();
        let minor = abs % 100;

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, ch) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{} {}{}.{:02}", self.currency, sign, grouped, minor)
    }
}
