//! USSD command handlers.

mod handle_ussd_request;

pub use handle_ussd_request::{
    HandleUssdRequestCommand, HandleUssdRequestHandler, UssdSettings, DEV_BYPASS_TENANT_NAME,
};
