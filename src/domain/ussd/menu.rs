//! Menu state machine.
//!
//! Each selection moves the menu one step. States carry whatever the caller
//! has entered so far; nothing here touches storage, so every transition can
//! be exercised without a gateway or database.
//!
//! ```text
//! MainMenu --1--> PropertyPrompt(Balance)     --P--> PropertyEntered --R--> RoomEntered(Balance)
//! MainMenu --2--> PropertyPrompt(Maintenance) --P--> PropertyEntered --R--> RoomEntered(Maintenance) --D--> DescriptionEntered
//! anything else --> Invalid (absorbing)
//! ```

/// Which branch of the main menu the caller picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    RentBalance,
    Maintenance,
}

impl Flow {
    /// Main menu option that starts this flow.
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection {
            "1" => Some(Flow::RentBalance),
            "2" => Some(Flow::Maintenance),
            _ => None,
        }
    }
}

/// Position in the menu after replaying the caller's selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    PropertyPrompt {
        flow: Flow,
    },
    PropertyEntered {
        flow: Flow,
        property: String,
    },
    RoomEntered {
        flow: Flow,
        property: String,
        room: String,
    },
    DescriptionEntered {
        property: String,
        room: String,
        description: String,
    },
    Invalid,
}

impl MenuState {
    /// Applies one selection.
    pub fn next(self, selection: &str) -> MenuState {
        use MenuState::*;

        match self {
            MainMenu => match Flow::from_selection(selection) {
                Some(flow) => PropertyPrompt { flow },
                None => Invalid,
            },
            PropertyPrompt { flow } => PropertyEntered {
                flow,
                property: selection.to_string(),
            },
            PropertyEntered { flow, property } => RoomEntered {
                flow,
                property,
                room: selection.to_string(),
            },
            RoomEntered {
                flow: Flow::Maintenance,
                property,
                room,
            } => DescriptionEntered {
                property,
                room,
                description: selection.to_string(),
            },
            RoomEntered {
                flow: Flow::RentBalance,
                ..
            }
            | DescriptionEntered { .. }
            | Invalid => Invalid,
        }
    }

    /// Folds a full selection sequence starting from the main menu.
    pub fn replay<'a>(selections: impl IntoIterator<Item = &'a str>) -> MenuState {
        selections
            .into_iter()
            .fold(MenuState::MainMenu, MenuState::next)
    }
}
