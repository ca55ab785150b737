//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deeplink;
mod endpoint;
mod guide_step;

pub use deeplink::{Deeplink, DEEPLINK_BASE};
pub use endpoint::{Endpoint, HttpMethod, CONSOLE_ENDPOINTS, SAMPLE_AWB, SUMMARY_ENDPOINTS};
pub use guide_step::{
    GuideStep, StepAction, API_OPENED, GUIDE_STEPS, OFFER_API_BROWSER, PLACEHOLDER_BASE_URL,
    RAILWAY_URL,
};
