//! Guide use case module
//!
//! The interactive Railway deployment walkthrough.

mod options;
mod result;
mod use_case;

pub use options::GuideOptions;
pub use result::GuideOutcome;
pub use use_case::GuideUseCase;
