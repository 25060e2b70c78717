//! In-Memory Tenancy Store
//!
//! Backs every persistence port with process-local maps.
//! Useful for testing and for running the service without PostgreSQL.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Money, PhoneNumber, PropertyId, TenantId};
use crate::domain::tenancy::{MaintenanceTicket, Property, Tenant};
use crate::ports::{MaintenanceTicketRepository, PropertyRepository, RentLedger, TenantRepository};

type BalanceKey = (TenantId, PropertyId, String);

/// In-memory storage for tenants, properties, balances, and tickets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenancyStore {
    tenants: Arc<RwLock<HashMap<TenantId, Tenant>>>,
    properties: Arc<RwLock<HashMap<PropertyId, Property>>>,
    balances: Arc<RwLock<HashMap<BalanceKey, Money>>>,
    tickets: Arc<RwLock<Vec<MaintenanceTicket>>>,
}

impl InMemoryTenancyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a tenant, replacing any with the same id.
    pub async fn insert_tenant(&self, tenant: Tenant) {
        self.tenants.write().await.insert(tenant.id, tenant);
    }

    /// Seeds a property together with its rooms and members.
    pub async fn insert_property(&self, property: Property) {
        self.properties.write().await.insert(property.id, property);
    }

    /// Records the outstanding balance for a tenant's room.
    pub async fn set_balance(
        &self,
        tenant_id: TenantId,
        property_id: PropertyId,
        room: impl Into<String>,
        balance: Money,
    ) {
        self.balances
            .write()
            .await
            .insert((tenant_id, property_id, room.into()), balance);
    }

    pub async fn ticket_count(&self) -> usize {
        self.tickets.read().await.len()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenancyStore {
    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError> {
        let tenants = self.tenants.read().await;
        Ok(tenants
            .values()
            .find(|tenant| &tenant.phone_number == phone)
            .cloned())
    }

    async fn create(&self, tenant: &Tenant) -> Result<(), DomainError> {
        let mut tenants = self.tenants.write().await;
        if tenants
            .values()
            .any(|existing| existing.phone_number == tenant.phone_number)
        {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Phone number is already registered",
            )
            .with_detail("phone_number", tenant.phone_number.as_str()));
        }
        tenants.insert(tenant.id, tenant.clone());
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for InMemoryTenancyStore {
    async fn find_for_tenant(
        &self,
        tenant_id: &TenantId,
        name: &str,
    ) -> Result<Option<Property>, DomainError> {
        let properties = self.properties.read().await;
        Ok(properties
            .values()
            .find(|property| property.has_tenant(tenant_id) && property.name_matches(name))
            .cloned())
    }
}

#[async_trait]
impl RentLedger for InMemoryTenancyStore {
    async fn balance(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        room: &str,
    ) -> Result<Option<Money>, DomainError> {
        let balances = self.balances.read().await;
        Ok(balances
            .get(&(*tenant_id, *property_id, room.to_string()))
            .cloned())
    }
}

#[async_trait]
impl MaintenanceTicketRepository for InMemoryTenancyStore {
    async fn create(&self, ticket: &MaintenanceTicket) -> Result<(), DomainError> {
        let properties = self.properties.read().await;
        let property = properties.get(&ticket.property_id).ok_or_else(|| {
            DomainError::new(ErrorCode::PropertyNotFound, "Property not found")
                .with_detail("property_id", ticket.property_id.to_string())
        })?;

        if !property.has_tenant(&ticket.tenant_id) {
            return Err(DomainError::new(
                ErrorCode::NotAMember,
                "Tenant is not registered for this property",
            )
            .with_detail("tenant_id", ticket.tenant_id.to_string()));
        }
        if !property.has_room(&ticket.room) {
            return Err(
                DomainError::new(ErrorCode::RoomNotFound, "Room is not part of this property")
                    .with_detail("room", ticket.room.clone()),
            );
        }

        self.tickets.write().await.push(ticket.clone());
        Ok(())
    }

    async fn list_for_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MaintenanceTicket>, DomainError> {
        let tickets = self.tickets.read().await;
        Ok(tickets
            .iter()
            .rev()
            .filter(|ticket| &ticket.tenant_id == tenant_id)
            .cloned()
            .collect())
    }
}
