//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `tenancy` - Tenants, properties, rooms, and maintenance tickets
//! - `ussd` - Menu input, state machine, and response screens

pub mod foundation;
pub mod tenancy;
pub mod ussd;
