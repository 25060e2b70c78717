//! Recording notifier for tests and local development.
//!
//! Records every message instead of sending it. Failures can be injected
//! to exercise the "delivery failed" path.
//!
//! # Example
//!
//! ```ignore
//! let notifier = RecordingNotifier::new();
//! notifier.fail_with("provider down");
//! let outcome = notifier.send(&phone, "Renti: hello").await;
//! assert_eq!(notifier.sent().len(), 1);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::PhoneNumber;
use crate::ports::{DeliveryOutcome, DeliveryReceipt, Notifier};

/// A message handed to the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: PhoneNumber,
    pub message: String,
}

#[derive(Default)]
struct RecorderState {
    sent: Vec<SentMessage>,
    failure: Option<String>,
}

/// Notifier double with a shared call log.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    inner: Arc<Mutex<RecorderState>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent send reports failure with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.state().failure = Some(reason.into());
    }

    pub fn clear_failure(&self) {
        self.state().failure = None;
    }

    /// All recorded messages, oldest first.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state().sent.clone()
    }

    pub fn clear(&self) {
        self.state().sent.clear();
    }

    fn state(&self) -> MutexGuard<'_, RecorderState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, to: &PhoneNumber, message: &str) -> DeliveryOutcome {
        let mut state = self.state();
        state.sent.push(SentMessage {
            to: to.clone(),
            message: message.to_string(),
        });

        tracing::debug!(to = %to, message, "Recorded SMS");

        match &state.failure {
            Some(reason) => DeliveryOutcome::failed(reason.clone()),
            None => DeliveryOutcome::Delivered(DeliveryReceipt {
                message_id: Some(format!("recorded-{}", state.sent.len())),
                status: "Success".to_string(),
                cost: None,
            }),
        }
    }
}
