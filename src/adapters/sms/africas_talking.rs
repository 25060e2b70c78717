//! Africa's Talking SMS adapter.
//!
//! Implements the `Notifier` port against the `version1/messaging` endpoint.
//! Every failure is folded into [`DeliveryOutcome::Failed`]; nothing here
//! can surface as an error to the USSD caller.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AfricasTalkingConfig::new("sandbox", api_key).sandbox();
//! let notifier = AfricasTalkingNotifier::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::foundation::PhoneNumber;
use crate::ports::{DeliveryOutcome, DeliveryReceipt, Notifier};

/// Production API host.
pub const LIVE_BASE_URL: &str = "https://api.africastalking.com";

/// Sandbox API host.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.africastalking.com";

const MESSAGING_PATH: &str = "/version1/messaging";

/// Africa's Talking API configuration.
#[derive(Clone)]
pub struct AfricasTalkingConfig {
    username: String,
    api_key: SecretString,
    sender_id: Option<String>,
    base_url: String,
    request_timeout: Duration,
}

impl AfricasTalkingConfig {
    pub fn new(username: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            username: username.into(),
            api_key,
            sender_id: None,
            base_url: LIVE_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Points the adapter at the sandbox host.
    pub fn sandbox(mut self) -> Self {
        self.base_url = SANDBOX_BASE_URL.to_string();
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Registered alphanumeric sender or short code.
    pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        let sender_id = sender_id.into();
        self.sender_id = (!sender_id.trim().is_empty()).then_some(sender_id);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn has_credentials(&self) -> bool {
        !self.username.trim().is_empty() && !self.api_key.expose_secret().trim().is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, MESSAGING_PATH)
    }
}

impl std::fmt::Debug for AfricasTalkingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AfricasTalkingConfig")
            .field("username", &self.username)
            .field("api_key", &"[REDACTED]")
            .field("sender_id", &self.sender_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Reasons a send did not reach the provider or was refused by it.
#[derive(Debug, Error)]
pub enum SmsError {
    #[error("SMS credentials are not configured")]
    MissingCredentials,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unexpected provider response: {0}")]
    Decode(String),

    #[error("no recipient in provider response")]
    NoRecipient,

    #[error("provider rejected message ({status_code}): {status}")]
    Rejected { status_code: u16, status: String },
}

/// Sends SMS through Africa's Talking.
pub struct AfricasTalkingNotifier {
    config: AfricasTalkingConfig,
    http_client: OnceCell<reqwest::Client>,
}

impl AfricasTalkingNotifier {
    /// The HTTP client is built on first send.
    pub fn new(config: AfricasTalkingConfig) -> Self {
        Self {
            config,
            http_client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&reqwest::Client, SmsError> {
        self.http_client.get_or_try_init(|| {
            reqwest::Client::builder()
                .timeout(self.config.request_timeout)
                .build()
                .map_err(SmsError::Client)
        })
    }

    async fn deliver(&self, to: &PhoneNumber, message: &str) -> Result<DeliveryReceipt, SmsError> {
        if !self.config.has_credentials() {
            return Err(SmsError::MissingCredentials);
        }

        let mut form: Vec<(&str, &str)> = vec![
            ("username", self.config.username.as_str()),
            ("to", to.as_str()),
            ("message", message),
        ];
        if let Some(sender_id) = &self.config.sender_id {
            form.push(("from", sender_id.as_str()));
        }

        let response = self
            .client()?
            .post(self.config.endpoint())
            .header("apiKey", self.config.api_key.expose_secret().as_str())
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SmsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_receipt(&body)
    }
}

#[async_trait]
impl Notifier for AfricasTalkingNotifier {
    async fn send(&self, to: &PhoneNumber, message: &str) -> DeliveryOutcome {
        match self.deliver(to, message).await {
            Ok(receipt) => {
                tracing::info!(
                    to = %to,
                    message_id = ?receipt.message_id,
                    cost = ?receipt.cost,
                    "SMS sent"
                );
                DeliveryOutcome::Delivered(receipt)
            }
            Err(err) => {
                tracing::warn!(to = %to, error = %err, "SMS send failed");
                DeliveryOutcome::failed(err.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct MessagingResponse {
    #[serde(rename = "SMSMessageData")]
    data: MessageData,
}

#[derive(Debug, Deserialize)]
struct MessageData {
    #[serde(rename = "Message", default)]
    message: Option<String>,
    #[serde(rename = "Recipients", default)]
    recipients: Vec<Recipient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recipient {
    status_code: u16,
    #[serde(default)]
    status: String,
    #[serde(default)]
    cost: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
}

impl Recipient {
    /// 100 Processed, 101 Sent, 102 Queued.
    fn accepted(&self) -> bool {
        (100..=102).contains(&self.status_code)
    }
}

fn parse_receipt(body: &str) -> Result<DeliveryReceipt, SmsError> {
    let parsed: MessagingResponse =
        serde_json::from_str(body).map_err(|e| SmsError::Decode(e.to_string()))?;

    let recipient = match parsed.data.recipients.into_iter().next() {
        Some(recipient) => recipient,
        None => {
            tracing::debug!(message = ?parsed.data.message, "Provider response had no recipients");
            return Err(SmsError::NoRecipient);
        }
    };

    if !recipient.accepted() {
        return Err(SmsError::Rejected {
            status_code: recipient.status_code,
            status: recipient.status,
        });
    }

    Ok(DeliveryReceipt {
        message_id: recipient.message_id,
        status: recipient.status,
        cost: recipient.cost,
    })
}
