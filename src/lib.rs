//! CargoDham Railway deployment guide
//!
//! Walks an operator through deploying the CargoDham MCP server to Railway,
//! then produces the Cursor MCP configuration, its install deeplink, and a
//! Markdown deployment summary.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{GuideOptions, GuideOutcome, GuideUseCase};
pub use domain::entities::{DeploymentConfig, McpServerConfig};
pub use domain::services::{build_config, render_summary, BuiltConfig, SUMMARY_FILE_NAME};
pub use domain::value_objects::Deeplink;
pub use error::{GuideError, GuideResult};
