//! Axum router configuration for the USSD endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_ussd, health, UssdAppState};

/// Create the USSD router.
///
/// # Routes
/// - `POST /ussd` and `POST /ussd/` - Gateway callback (gateways differ on
///   the trailing slash)
/// - `GET /health` - Liveness probe
pub fn ussd_router() -> Router<UssdAppState> {
    Router::new()
        .route("/ussd", post(handle_ussd))
        .route("/ussd/", post(handle_ussd))
        .route("/health", get(health))
}
