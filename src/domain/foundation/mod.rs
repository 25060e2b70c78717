//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Renti domain.

mod errors;
mod ids;
mod money;
mod phone_number;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PropertyId, TenantId, TicketId};
pub use money::{is_currency_code, Money};
pub use phone_number::PhoneNumber;
pub use timestamp::Timestamp;
