//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes for the USSD gateway callback
//! - `postgres` - sqlx-backed repositories
//! - `memory` - In-process store for development and tests
//! - `sms` - Africa's Talking notifier and a recording double

pub mod http;
pub mod memory;
pub mod postgres;
pub mod sms;
