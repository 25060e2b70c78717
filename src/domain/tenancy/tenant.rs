//! Tenant entity: a registered caller.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PhoneNumber, TenantId, Timestamp, ValidationError};

/// A caller known to the system, identified by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub phone_number: PhoneNumber,
    pub created_at: Timestamp,
}

impl Tenant {
    /// Creates a new tenant with a fresh id.
    pub fn new(name: impl Into<String>, phone_number: PhoneNumber) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: TenantId::new(),
            name,
            phone_number,
            created_at: Timestamp::now(),
        })
    }
}
