//! Guide Result

use std::path::PathBuf;

use crate::domain::entities::DeploymentConfig;
use crate::domain::value_objects::Deeplink;

/// What one completed run of the guide produced.
#[derive(Debug, Clone)]
pub struct GuideOutcome {
    /// Base URL after placeholder substitution
    pub base_url: String,
    pub config: DeploymentConfig,
    pub deeplink: Deeplink,
    /// Where the summary document was written
    pub summary_path: PathBuf,
    /// URLs the operator asked to open, in order
    pub opened_urls: Vec<String>,
}
