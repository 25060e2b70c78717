//! HTTP handlers for the USSD callback.

use std::sync::Arc;

use axum::extract::State;

use super::dto::{UssdReply, UssdRequest};
use crate::application::{HandleUssdRequestHandler, UssdSettings};
use crate::ports::{
    MaintenanceTicketRepository, Notifier, PropertyRepository, RentLedger, TenantRepository,
};

/// Shared state for USSD endpoints.
#[derive(Clone)]
pub struct UssdAppState {
    pub tenant_repository: Arc<dyn TenantRepository>,
    pub property_repository: Arc<dyn PropertyRepository>,
    pub rent_ledger: Arc<dyn RentLedger>,
    pub ticket_repository: Arc<dyn MaintenanceTicketRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub settings: UssdSettings,
}

impl UssdAppState {
    /// Create the dispatcher from the shared state.
    pub fn ussd_handler(&self) -> HandleUssdRequestHandler {
        HandleUssdRequestHandler::new(
            self.tenant_repository.clone(),
            self.property_repository.clone(),
            self.rent_ledger.clone(),
            self.ticket_repository.clone(),
            self.notifier.clone(),
            self.settings.clone(),
        )
    }
}

/// POST /ussd - Gateway callback
pub async fn handle_ussd(State(state): State<UssdAppState>, request: UssdRequest) -> UssdReply {
    let command = request.into_command();
    let session_id = command.session_id.clone();

    let response = state.ussd_handler().handle(command).await;

    tracing::info!(
        session_id = ?session_id,
        terminal = response.is_terminal(),
        "USSD request handled"
    );
    UssdReply(response)
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
