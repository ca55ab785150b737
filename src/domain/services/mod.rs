//! Domain Services
//!
//! Pure business logic services with no I/O dependencies.

mod config_builder;
mod summary;

pub use config_builder::{build_config, BuiltConfig};
pub use summary::{render_summary, SUMMARY_FILE_NAME};
