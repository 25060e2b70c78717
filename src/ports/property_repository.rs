//! Property repository port (read side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TenantId};
use crate::domain::tenancy::Property;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Finds a property the tenant belongs to by name.
    ///
    /// The name match is case-insensitive and exact; properties the tenant
    /// is not a member of are never returned. The returned property carries
    /// its full room set.
    async fn find_for_tenant(
        &self,
        tenant_id: &TenantId,
        name: &str,
    ) -> Result<Option<Property>, DomainError>;
}
