//! Rent ledger port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Money, PropertyId, TenantId};

/// Read access to outstanding rent.
#[async_trait]
pub trait RentLedger: Send + Sync {
    /// Outstanding balance for a tenant's room.
    ///
    /// Returns `None` when nothing has been recorded, which callers treat as
    /// a zero balance.
    async fn balance(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        room: &str,
    ) -> Result<Option<Money>, DomainError>;
}
