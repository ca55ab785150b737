//! Domain Layer
//!
//! Pure logic for the deployment guide, free of console and file I/O.
//!
//! ## Structure
//!
//! - `entities/` - The deployment configuration (MCP server entry)
//! - `value_objects/` - Deeplink and endpoint catalogue
//! - `services/` - Summary document rendering
//! - `ports/` - Prompter and browser interfaces for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
