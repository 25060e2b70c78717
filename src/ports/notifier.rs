//! Notifier port - outbound text messages to callers.
//!
//! Delivery is best-effort. Implementations report failure through
//! [`DeliveryOutcome::Failed`] and never return an error, so a broken SMS
//! provider can not change what the caller sees on the USSD screen.

use async_trait::async_trait;

use crate::domain::foundation::PhoneNumber;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` to `to`.
    async fn send(&self, to: &PhoneNumber, message: &str) -> DeliveryOutcome;
}

/// Provider acknowledgement for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliveryReceipt {
    pub message_id: Option<String>,
    pub status: String,
    pub cost: Option<String>,
}

/// Result of a notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered(DeliveryReceipt),
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        DeliveryOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered(_))
    }
}
