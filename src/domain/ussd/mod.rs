//! USSD menu vocabulary: accumulated input, the menu state machine,
//! response screens, rejections, and message text.

mod input;
pub mod menu;
pub mod messages;
mod rejection;
mod response;

pub use input::{MenuInput, SEGMENT_SEPARATOR};
pub use menu::{Flow, MenuState};
pub use rejection::Rejection;
pub use response::UssdResponse;
