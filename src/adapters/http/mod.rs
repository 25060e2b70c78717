//! HTTP adapters - axum endpoint exposure.

pub mod ussd;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use ussd::{ussd_router, UssdAppState};

/// Builds the application router with tracing and a request timeout.
pub fn build_router(state: UssdAppState, request_timeout: Duration) -> Router {
    ussd_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
