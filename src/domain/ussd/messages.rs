//! Caller-facing text for menu screens and SMS notifications.

use crate::domain::foundation::Money;

pub const ENTER_PROPERTY: &str = "Enter property name";
pub const ENTER_ROOM: &str = "Enter room number";
pub const DESCRIBE_ISSUE: &str = "Describe the issue";
pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";
pub const INVALID_SERVICE_CODE: &str = "Invalid service code.";

const SMS_PREFIX: &str = "Renti: ";

pub fn main_menu(tenant_name: &str) -> String {
    format!(
        "Karibu Renti, {}\n1. Check Rent Balance\n2. Report Maintenance",
        tenant_name
    )
}

pub fn rent_balance(property: &str, room: &str, balance: &Money) -> String {
    format!(
        "Your rent balance for {} room {} is {}.",
        property, room, balance
    )
}

pub fn ticket_submitted(reference: &str, property: &str, room: &str) -> String {
    format!(
        "Maintenance request {} for {} room {} submitted successfully.",
        reference, property, room
    )
}

/// SMS body for a screen message.
pub fn sms(message: &str) -> String {
    format!("{}{}", SMS_PREFIX, message)
}
