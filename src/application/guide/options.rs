//! Guide Options

use std::path::PathBuf;

use crate::domain::value_objects::PLACEHOLDER_BASE_URL;

/// Options for the guide use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideOptions {
    /// Directory that receives `RAILWAY_DEPLOYMENT_SUMMARY.md`
    pub output_dir: PathBuf,
    /// Base URL substituted when the URL prompt is left empty
    pub placeholder_url: String,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            placeholder_url: PLACEHOLDER_BASE_URL.to_string(),
        }
    }
}

impl GuideOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Resolve the operator's URL answer. Only an exactly empty answer falls
    /// back to the placeholder.
    pub fn resolve_base_url(&self, answer: String) -> String {
        if answer.is_empty() {
            self.placeholder_url.clone()
        } else {
            answer
        }
    }
}
