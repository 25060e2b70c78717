//! Renti - USSD self-service for tenants
//!
//! Tenants dial a short code to check their rent balance or report a
//! maintenance issue. Each gateway callback is answered with a `CON` or
//! `END` screen, and terminal outcomes are confirmed by SMS.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
