//! Config Builder
//!
//! Pure function from base URL to the configuration object and its deeplink.

use crate::domain::entities::DeploymentConfig;
use crate::domain::value_objects::Deeplink;
use crate::error::GuideResult;

/// Output of [`build_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltConfig {
    pub config: DeploymentConfig,
    pub deeplink: Deeplink,
}

/// Build the MCP configuration and deeplink for `base_url`.
///
/// Any string is accepted and embedded verbatim, including the empty string.
/// Output depends on nothing but `base_url`.
pub fn build_config(base_url: &str) -> GuideResult<BuiltConfig> {
    let config = DeploymentConfig::new(base_url);
    let deeplink = Deeplink::from_config(&config)?;
    Ok(BuiltConfig { config, deeplink })
}
