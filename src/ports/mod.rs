//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `TenantRepository` - Caller lookup by phone number
//! - `PropertyRepository` - Membership-scoped property lookup by name
//! - `RentLedger` - Outstanding rent per room
//! - `MaintenanceTicketRepository` - Append-only ticket storage
//!
//! ## Messaging Ports
//!
//! - `Notifier` - Best-effort SMS delivery

mod maintenance_ticket_repository;
mod notifier;
mod property_repository;
mod rent_ledger;
mod tenant_repository;

pub use maintenance_ticket_repository::MaintenanceTicketRepository;
pub use notifier::{DeliveryOutcome, DeliveryReceipt, Notifier};
pub use property_repository::PropertyRepository;
pub use rent_ledger::RentLedger;
pub use tenant_repository::TenantRepository;
