//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::ussd::{
    HandleUssdRequestCommand, HandleUssdRequestHandler, UssdSettings, DEV_BYPASS_TENANT_NAME,
};
