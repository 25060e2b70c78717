//! Expected, caller-facing reasons a session ends early.

use thiserror::Error;

/// A request the menu refuses to carry further.
///
/// These are normal outcomes, not faults: each renders as an `END` screen,
/// and all but [`Rejection::InvalidSelection`] are also sent to the caller
/// by SMS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("This number is not registered with Renti. Please contact your landlord.")]
    UnregisteredNumber,

    #[error("You are not registered for property {name}.")]
    UnknownProperty { name: String },

    #[error("Room {room} is not registered under {property}.")]
    UnknownRoom { property: String, room: String },

    #[error("Invalid selection.")]
    InvalidSelection,
}

impl Rejection {
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Rejection::UnknownProperty { name: name.into() }
    }

    pub fn unknown_room(property: impl Into<String>, room: impl Into<String>) -> Self {
        Rejection::UnknownRoom {
            property: property.into(),
            room: room.into(),
        }
    }

    /// Whether the caller should also be told by SMS.
    pub fn notifies_caller(&self) -> bool {
        !matches!(self, Rejection::InvalidSelection)
    }

    /// Screen text for the `END` response.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
