//! Maintenance ticket repository port.
//!
//! Tickets are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TenantId};
use crate::domain::tenancy::MaintenanceTicket;

#[async_trait]
pub trait MaintenanceTicketRepository: Send + Sync {
    /// Stores a ticket after checking that its tenant belongs to the
    /// property and that the room is one of the property's rooms.
    ///
    /// # Errors
    ///
    /// - `NotAMember` if the tenant is not on the property
    /// - `RoomNotFound` if the room is not part of the property
    /// - `DatabaseError` on storage failure
    async fn create(&self, ticket: &MaintenanceTicket) -> Result<(), DomainError>;

    /// Tickets filed by a tenant, newest first.
    async fn list_for_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MaintenanceTicket>, DomainError>;
}
