//! Presentation Layer
//!
//! - `cli` - Argument parsing (via clap)

pub mod cli;

pub use cli::{Cli, ColorWhen};
