//! Gateway response screens.

use std::fmt;

/// A screen returned to the USSD gateway.
///
/// `Continue` keeps the session open for more input (`CON`), `End` closes
/// it (`END`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UssdResponse {
    Continue(String),
    End(String),
}

impl UssdResponse {
    pub fn continue_with(text: impl Into<String>) -> Self {
        UssdResponse::Continue(text.into())
    }

    pub fn end(text: impl Into<String>) -> Self {
        UssdResponse::End(text.into())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UssdResponse::End(_))
    }

    /// Screen text without the `CON`/`END` prefix.
    pub fn text(&self) -> &str {
        match self {
            UssdResponse::Continue(text) | UssdResponse::End(text) => text,
        }
    }
}

impl fmt::Display for UssdResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UssdResponse::Continue(text) => write!(f, "CON {}", text),
            UssdResponse::End(text) => write!(f, "END {}", text),
        }
    }
}
