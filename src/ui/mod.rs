//! Console UI
//!
//! Design tokens, terminal detection and text rendering for the guide.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
