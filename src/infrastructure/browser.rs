//! System Browser Launcher
//!
//! Opens URLs with the platform's default handler:
//! - macOS: `open <url>`
//! - Windows: `cmd /C start "" <url>`
//! - others: `xdg-open <url>`

use std::process::{Command, Stdio};

use crate::domain::ports::BrowserLauncher;

/// Launches the default browser without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }

    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) {
        let spawned = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => tracing::debug!(url, pid = child.id(), "browser launched"),
            Err(e) => tracing::debug!(url, error = %e, "browser launch failed"),
        }
    }
}
