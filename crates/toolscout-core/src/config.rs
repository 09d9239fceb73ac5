//! Workflow selection.
//!
//! The process builds exactly one workflow at startup and hands it to the
//! request handler.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::error::{ScoutError, ScoutResult};
use crate::workflow::{http::DEFAULT_WORKFLOW_URL, FixtureWorkflow, HttpWorkflow, Workflow};

/// Where research results come from.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowSource {
    /// Remote research service.
    Remote {
        base_url: String,
        timeout: Option<Duration>,
    },
    /// Recorded results in a JSON file.
    Fixtures(PathBuf),
}

impl Default for WorkflowSource {
    fn default() -> Self {
        Self::Remote {
            base_url: DEFAULT_WORKFLOW_URL.to_string(),
            timeout: None,
        }
    }
}

impl WorkflowSource {
    /// Construct the workflow this source describes.
    pub fn build(&self) -> ScoutResult<Arc<dyn Workflow>> {
        match self {
            Self::Remote { base_url, timeout } => {
                if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                    return Err(ScoutError::config(format!(
                        "workflow URL must start with http:// or https://, got '{}'",
                        base_url
                    )));
                }
                info!(base_url = %base_url, "Using remote research workflow");
                Ok(Arc::new(HttpWorkflow::new(base_url, *timeout)?))
            }
            Self::Fixtures(path) => {
                info!(path = %path.display(), "Using fixture research workflow");
                Ok(Arc::new(FixtureWorkflow::load(path)?))
            }
        }
    }
}
