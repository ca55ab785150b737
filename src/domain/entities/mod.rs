//! Domain Entities
//!
//! - `DeploymentConfig` - The MCP server entry a client imports

mod deployment_config;

pub use deployment_config::{
    escape_non_ascii, DeploymentConfig, McpServerConfig, LAUNCHER_COMMAND, LAUNCHER_FLAGS,
    SERVICE_NAME,
};
