//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod browser;
pub mod guide_view;
pub mod prompter;

pub use browser::{BrowserLauncher, NoBrowser};
pub use guide_view::{GuideEvent, GuideView, Question};
pub use prompter::{is_affirmative, Prompter};

#[cfg(test)]
pub use browser::RecordingBrowser;
#[cfg(test)]
pub use prompter::ScriptedPrompter;
