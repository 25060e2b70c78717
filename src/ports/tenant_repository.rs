//! Tenant repository port.
//!
//! Tenants are normally provisioned by admin tooling; the USSD flow only
//! reads them, except for the development bypass caller.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PhoneNumber};
use crate::domain::tenancy::Tenant;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Finds the tenant registered under a normalized phone number.
    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError>;

    /// Persists a new tenant.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the phone number is already registered
    /// - `DatabaseError` on storage failure
    async fn create(&self, tenant: &Tenant) -> Result<(), DomainError>;
}
