//! Scripted answer sequences.
//!
//! Order: railway offer, three pauses, base URL, API offer.

pub const DEMO_URL: &str = "https://demo.example.app";

pub const DEMO_ANSWERS: [&str; 6] = ["n", "", "", "", DEMO_URL, "n"];

pub const PLACEHOLDER_ANSWERS: [&str; 6] = ["n", "", "", "", "", "n"];

pub const DEEPLINK_PREFIX: &str =
    "cursor://anysphere.cursor-deeplink/mcp/install?name=cargodham-railway&config=";
