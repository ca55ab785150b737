//! Deployment Configuration Entity
//!
//! The MCP server entry a Cursor client imports to reach the deployed
//! CargoDham service. Serialized as a single-key object:
//!
//! ```json
//! {"cargodham-railway":{"command":"npx","args":["-y","@modelcontextprotocol/server-fetch","<base_url>"]}}
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GuideResult;

/// Integration name used as the top-level key and in the deeplink.
pub const SERVICE_NAME: &str = "cargodham-railway";

/// Bridging launcher the client runs.
pub const LAUNCHER_COMMAND: &str = "npx";

/// Launcher flags that precede the base URL.
pub const LAUNCHER_FLAGS: [&str; 2] = ["-y", "@modelcontextprotocol/server-fetch"];

/// A single MCP server launch entry.
///
/// Field order is serialization order: `command` before `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerConfig {
    pub command: String,
    pub args: Vec<String>,
}

/// Deployment configuration for one run of the guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    service_name: String,
    server: McpServerConfig,
}

impl DeploymentConfig {
    /// Build the configuration for `base_url`.
    ///
    /// The URL is embedded verbatim; no validation or trimming happens here.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut args: Vec<String> = LAUNCHER_FLAGS.iter().map(|s| s.to_string()).collect();
        args.push(base_url.into());

        Self {
            service_name: SERVICE_NAME.to_string(),
            server: McpServerConfig {
                command: LAUNCHER_COMMAND.to_string(),
                args,
            },
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn command(&self) -> &str {
        &self.server.command
    }

    pub fn args(&self) -> &[String] {
        &self.server.args
    }

    pub fn server(&self) -> &McpServerConfig {
        &self.server
    }

    /// The base URL (last launcher argument).
    pub fn base_url(&self) -> &str {
        self.server.args.last().map(String::as_str).unwrap_or_default()
    }

    /// Compact JSON with no insignificant whitespace.
    ///
    /// This is the exact byte sequence embedded in the deeplink.
    pub fn to_compact_json(&self) -> GuideResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(escape_non_ascii(&json))
    }

    /// Two-space indented JSON for display and the summary document.
    pub fn to_pretty_json(&self) -> GuideResult<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(escape_non_ascii(&json))
    }

    /// Parse a configuration object back from JSON.
    pub fn from_json(json: &str) -> GuideResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for DeploymentConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.service_name, &self.server)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeploymentConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, McpServerConfig>::deserialize(deserializer)?;
        if entries.len() != 1 {
            return Err(serde::de::Error::invalid_length(
                entries.len(),
                &"exactly one MCP server entry",
            ));
        }

        let (service_name, server) = entries
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("empty configuration"))?;
        Ok(Self {
            service_name,
            server,
        })
    }
}

/// Escape every non-ASCII character, and DEL, as `\uXXXX`.
///
/// Serialized JSON only carries non-ASCII text inside string literals, so a
/// whole-document pass is equivalent to escaping each string. Characters
/// outside the BMP become UTF-16 surrogate pairs. DEL is ASCII but falls
/// outside the printable range `' '..='~'`, so it is escaped as well.
pub fn escape_non_ascii(json: &str) -> String {
    if !json.chars().any(needs_escape) {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        if !needs_escape(c) {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{:04x}", unit);
        }
    }
    out
}

// Control characters below 0x20 are already escaped by serde_json.
fn needs_escape(c: char) -> bool {
    !c.is_ascii() || c == '\u{7f}'
}
