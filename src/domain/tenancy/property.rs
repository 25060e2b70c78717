//! Property entity with its fixed set of rooms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{PropertyId, TenantId, ValidationError};

/// A named property, its rooms, and the tenants allowed to transact on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub rooms: BTreeSet<String>,
    pub tenants: BTreeSet<TenantId>,
}

impl Property {
    pub fn new<I, S>(name: impl Into<String>, rooms: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: PropertyId::new(),
            name,
            rooms: rooms.into_iter().map(Into::into).collect(),
            tenants: BTreeSet::new(),
        })
    }

    /// Adds a tenant to the property's membership.
    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenants.insert(tenant_id);
        self
    }

    /// Case-insensitive exact name match.
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.to_lowercase() == candidate.trim().to_lowercase()
    }

    /// Exact-string room membership.
    pub fn has_room(&self, room: &str) -> bool {
        self.rooms.contains(room)
    }

    pub fn has_tenant(&self, tenant_id: &TenantId) -> bool {
        self.tenants.contains(tenant_id)
    }
}
