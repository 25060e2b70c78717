//! Request decoding and response rendering for the USSD callback.
//!
//! Gateways disagree on body encoding. Whatever arrives, it is reduced to
//! one [`UssdRequest`] carrying the four logical fields.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::application::HandleUssdRequestCommand;
use crate::domain::ussd::{messages, UssdResponse};

/// Number of body bytes echoed to the debug log.
const LOGGED_BODY_BYTES: usize = 1024;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A gateway callback, independent of how it was encoded.
///
/// Both camelCase and snake_case keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UssdRequest {
    pub session_id: Option<String>,
    pub service_code: Option<String>,
    pub phone_number: Option<String>,
    pub text: Option<String>,
}

/// Why a callback body could not be turned into a [`UssdRequest`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read request body: {0}")]
    Body(String),

    #[error("request body is empty")]
    Empty,

    #[error("request body carries none of sessionId, serviceCode, phoneNumber, text")]
    MissingFields,
}

impl UssdRequest {
    /// Decodes a callback body.
    ///
    /// JSON is attempted when the content type says so or the body looks
    /// like an object; a body that is not a JSON object falls back to
    /// urlencoded. JSON numbers and booleans are read as their text, so one
    /// oddly typed field never discards the others.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<Self, DecodeError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        let request = if looks_like_json(content_type, body) {
            match serde_json::from_slice::<Map<String, Value>>(body) {
                Ok(object) => Self::from_json(object),
                Err(err) => {
                    tracing::debug!(error = %err, "JSON decode failed, falling back to urlencoded");
                    Self::from_urlencoded(body)
                }
            }
        } else {
            Self::from_urlencoded(body)
        };

        if request.is_blank() {
            return Err(DecodeError::MissingFields);
        }
        Ok(request)
    }

    fn from_json(object: Map<String, Value>) -> Self {
        let mut request = UssdRequest::default();
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            request.assign(&key, text);
        }
        request
    }

    fn from_urlencoded(body: &[u8]) -> Self {
        let mut request = UssdRequest::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            request.assign(&key, value.into_owned());
        }
        request
    }

    fn assign(&mut self, key: &str, value: String) {
        let slot = match key {
            "sessionId" | "session_id" => &mut self.session_id,
            "serviceCode" | "service_code" => &mut self.service_code,
            "phoneNumber" | "phone_number" => &mut self.phone_number,
            "text" => &mut self.text,
            _ => return,
        };
        *slot = Some(value);
    }

    fn is_blank(&self) -> bool {
        self.session_id.is_none()
            && self.service_code.is_none()
            && self.phone_number.is_none()
            && self.text.is_none()
    }

    /// Converts into the dispatcher command. `text` is trimmed.
    pub fn into_command(self) -> HandleUssdRequestCommand {
        HandleUssdRequestCommand {
            session_id: self.session_id,
            service_code: self.service_code,
            phone_number: self.phone_number,
            text: self.text.map(|t| t.trim().to_string()).unwrap_or_default(),
        }
    }
}

fn looks_like_json(content_type: Option<&str>, body: &[u8]) -> bool {
    let declared = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);
    let sniffed = body
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{');
    declared || sniffed
}

#[async_trait]
impl<S> FromRequest<S> for UssdRequest
where
    S: Send + Sync,
{
    type Rejection = DecodeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        tracing::debug!(headers = ?req.headers(), "USSD callback headers");

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| DecodeError::Body(e.to_string()))?;
        tracing::debug!(
            body = %String::from_utf8_lossy(&body[..body.len().min(LOGGED_BODY_BYTES)]),
            "USSD callback body"
        );

        UssdRequest::decode(content_type.as_deref(), &body)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Plain-text `CON`/`END` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UssdReply(pub UssdResponse);

impl IntoResponse for UssdReply {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.to_string(),
        )
            .into_response()
    }
}

impl IntoResponse for DecodeError {
    fn into_response(self) -> Response {
        // Gateways only render 200 responses, so the failure is reported in-band.
        tracing::warn!(error = %self, "Could not decode USSD callback");
        UssdReply(UssdResponse::end(messages::GENERIC_ERROR)).into_response()
    }
}
