//! Accumulated USSD input.
//!
//! The gateway resends everything the caller has typed in the session on
//! every request, joined by `*`. An empty string means the session just
//! opened.

use super::menu::MenuState;

/// Separator the gateway uses between successive menu selections.
pub const SEGMENT_SEPARATOR: char = '*';

/// The caller's selections so far, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuInput {
    segments: Vec<String>,
}

impl MenuInput {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: text.split(SEGMENT_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Replays every selection through the menu state machine.
    pub fn state(&self) -> MenuState {
        MenuState::replay(self.segments.iter().map(String::as_str))
    }
}
