//! In-memory adapters for development and tests.

mod in_memory_tenancy_store;

pub use in_memory_tenancy_store::InMemoryTenancyStore;
