//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTenantRepository` - Caller lookup by normalized phone number
//! - `PostgresPropertyRepository` - Membership-scoped property lookup
//! - `PostgresRentLedger` - Outstanding balances per room
//! - `PostgresMaintenanceTicketRepository` - Append-only ticket storage

mod maintenance_ticket_repository;
mod property_repository;
mod rent_ledger;
mod tenant_repository;

pub use maintenance_ticket_repository::PostgresMaintenanceTicketRepository;
pub use property_repository::PostgresPropertyRepository;
pub use rent_ledger::PostgresRentLedger;
pub use tenant_repository::PostgresTenantRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
