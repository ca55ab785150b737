//! Common test utilities for CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the guide
//! - Assertion macros: `assert_output_contains!`, `assert_summary_contains!`
//! - Fixtures: Scripted answer sequences

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
