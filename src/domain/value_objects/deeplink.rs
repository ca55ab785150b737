//! Cursor Deeplink Value Object
//!
//! A `cursor://` URL that makes Cursor import an MCP server entry. The entry
//! travels as base64 (standard alphabet, padded, unwrapped) of its compact JSON.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::entities::DeploymentConfig;
use crate::error::{GuideError, GuideResult};

/// Deeplink prefix up to the query string.
pub const DEEPLINK_BASE: &str = "cursor://anysphere.cursor-deeplink/mcp/install";

/// Immutable deeplink string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deeplink(String);

impl Deeplink {
    /// Encode `config` into a deeplink.
    ///
    /// Deterministic: the same config always yields the same bytes.
    pub fn from_config(config: &DeploymentConfig) -> GuideResult<Self> {
        let json = config.to_compact_json()?;
        let encoded = STANDARD.encode(json.as_bytes());
        Ok(Self(format!(
            "{}?name={}&config={}",
            DEEPLINK_BASE,
            config.service_name(),
            encoded
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `name` query parameter.
    pub fn name(&self) -> Option<&str> {
        self.query_param("name")
    }

    /// The raw base64 `config` query parameter.
    pub fn encoded_config(&self) -> Option<&str> {
        self.query_param("config")
    }

    /// Decode the embedded configuration object.
    pub fn decode_config(&self) -> GuideResult<DeploymentConfig> {
        let encoded = self
            .encoded_config()
            .ok_or_else(|| GuideError::DeeplinkDecode {
                message: "missing config parameter".to_string(),
            })?;

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| GuideError::DeeplinkDecode {
                message: format!("config is not valid base64: {}", e),
            })?;

        let json = String::from_utf8(bytes).map_err(|e| GuideError::DeeplinkDecode {
            message: format!("config is not valid UTF-8: {}", e),
        })?;

        DeploymentConfig::from_json(&json)
    }

    /// Parse an arbitrary string as a deeplink.
    pub fn parse(s: &str) -> GuideResult<Self> {
        let rest = s
            .strip_prefix(DEEPLINK_BASE)
            .ok_or_else(|| GuideError::DeeplinkDecode {
                message: format!("expected prefix '{}'", DEEPLINK_BASE),
            })?;
        if !rest.starts_with('?') {
            return Err(GuideError::DeeplinkDecode {
                message: "missing query string".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    fn query_param(&self, key: &str) -> Option<&str> {
        let (_, query) = self.0.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then_some(v)
        })
    }
}

impl fmt::Display for Deeplink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Deeplink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
