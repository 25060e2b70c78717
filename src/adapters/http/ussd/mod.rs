//! HTTP adapter for the USSD gateway callback.
//!
//! - `POST /ussd` - Accepts form, JSON, or raw urlencoded callbacks and
//!   replies with `CON ...` or `END ...` as `text/plain`
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{DecodeError, UssdReply, UssdRequest};
pub use handlers::UssdAppState;
pub use routes::ussd_router;
