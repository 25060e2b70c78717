//! SMS notifier adapters.
//!
//! - `AfricasTalkingNotifier` - Africa's Talking bulk SMS API
//! - `RecordingNotifier` - In-memory double that records every send

mod africas_talking;
mod recording_notifier;

pub use africas_talking::{AfricasTalkingConfig, AfricasTalkingNotifier, SmsError};
pub use recording_notifier::{RecordingNotifier, SentMessage};
