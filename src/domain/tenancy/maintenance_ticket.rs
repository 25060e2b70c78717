//! Maintenance ticket: the only record created from the USSD flow.
//!
//! Tickets are written once and never updated or deleted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PropertyId, TenantId, TicketId, Timestamp, ValidationError};

/// Upper bound on stored description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTicket {
    pub id: TicketId,
    pub tenant_id: TenantId,
    pub property_id: PropertyId,
    pub room: String,
    pub description: String,
    pub created_at: Timestamp,
}

impl MaintenanceTicket {
    /// Builds a new ticket, trimming and capping the description.
    pub fn new(
        tenant_id: TenantId,
        property_id: PropertyId,
        room: impl Into<String>,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        let description: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();

        Ok(Self {
            id: TicketId::new(),
            tenant_id,
            property_id,
            room: room.into(),
            description,
            created_at: Timestamp::now(),
        })
    }

    pub fn reference(&self) -> String {
        self.id.reference()
    }
}
