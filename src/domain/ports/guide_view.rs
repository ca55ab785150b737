//! Guide View Port
//!
//! The guide driver reports what happened through [`GuideEvent`]s and asks the
//! view to phrase each question. Rendering and styling stay on the other side
//! of this trait.

use std::io;

use crate::domain::value_objects::{GuideStep, StepAction};

/// Event emitted while the guide runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideEvent<'a> {
    /// Guide started; show the banner and feature list
    Started,

    /// A step begins; prompts for its actions follow
    Step(&'a GuideStep),

    /// A browser launch was requested
    BrowserOpened { message: &'a str },

    /// Base URL resolved and configuration built
    Report {
        base_url: &'a str,
        deeplink: &'a str,
        pretty_json: &'a str,
    },

    /// Summary document written
    SummarySaved { file_name: &'a str },

    /// Guide finished
    Finished { base_url: &'a str },
}

/// A question the driver is about to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question<'a> {
    Step(&'a StepAction),
    /// The `(y/N)` offer to open the resolved API URL
    OfferApiBrowser,
}

/// Trait for presenting guide progress
pub trait GuideView {
    /// Handle a guide event
    fn on_event(&mut self, event: GuideEvent<'_>) -> io::Result<()>;

    /// Prompt text for `question`
    fn question(&self, question: Question<'_>) -> String;

    /// Push buffered output out before a prompt blocks on input
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<V: GuideView + ?Sized> GuideView for &mut V {
    fn on_event(&mut self, event: GuideEvent<'_>) -> io::Result<()> {
        (**self).on_event(event)
    }

    fn question(&self, question: Question<'_>) -> String {
        (**self).question(question)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}
