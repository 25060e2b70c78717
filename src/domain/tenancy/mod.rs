//! Tenancy module - tenants, properties, rooms, and maintenance tickets.
//!
//! Tenants and properties are provisioned out-of-band; the only record the
//! USSD flow ever writes is a [`MaintenanceTicket`].

mod maintenance_ticket;
mod property;
mod tenant;

pub use maintenance_ticket::{MaintenanceTicket, MAX_DESCRIPTION_CHARS};
pub use property::Property;
pub use tenant::Tenant;
