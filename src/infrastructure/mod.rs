//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `prompt` - Terminal / piped-stdin prompter
//! - `browser` - Default-browser launcher
//! - `summary_writer` - Summary document persistence

pub mod browser;
pub mod prompt;
pub mod summary_writer;

pub use browser::SystemBrowser;
pub use prompt::ConsolePrompter;
pub use summary_writer::write_summary;
