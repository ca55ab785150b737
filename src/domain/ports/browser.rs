//! Browser Launcher Port
//!
//! Opening a URL is fire-and-forget: implementations report nothing back and
//! must not fail the guide.

#[cfg(test)]
use std::cell::RefCell;

/// Trait for opening a URL in the default browser.
pub trait BrowserLauncher {
    fn open(&self, url: &str);
}

impl<B: BrowserLauncher + ?Sized> BrowserLauncher for &B {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}

/// Launcher that never opens anything.
///
/// Use this when `--no-browser` is passed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBrowser;

impl BrowserLauncher for NoBrowser {
    fn open(&self, _url: &str) {
        // No-op
    }
}

/// Launcher that records requested URLs instead of opening them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    opened: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

#[cfg(test)]
impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
