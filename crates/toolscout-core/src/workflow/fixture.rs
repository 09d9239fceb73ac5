//! Workflow that replays recorded results from a JSON file.
//!
//! The file holds an array of `ResearchResult` objects. A query matches a
//! recorded result when both are equal ignoring case and surrounding
//! whitespace.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use super::Workflow;
use crate::error::{ScoutError, ScoutResult};
use crate::model::ResearchResult;

/// Offline workflow backed by recorded results.
#[derive(Debug, Clone)]
pub struct FixtureWorkflow {
    results: Vec<ResearchResult>,
}

impl FixtureWorkflow {
    /// Load recorded results from `path`.
    pub fn load(path: &Path) -> ScoutResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let results: Vec<ResearchResult> =
            serde_json::from_str(&content).map_err(|e| ScoutError::Fixture {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), count = results.len(), "Loaded research fixtures");

        Ok(Self { results })
    }
}

#[async_trait]
impl Workflow for FixtureWorkflow {
    fn name(&self) -> &str {
        "fixtures"
    }

    async fn run(&self, query: &str) -> ScoutResult<Option<ResearchResult>> {
        let wanted = query.trim().to_lowercase();
        let found = self
            .results
            .iter()
            .find(|r| r.query.trim().to_lowercase() == wanted)
            .cloned();

        debug!(query = %query, found = found.is_some(), "Fixture lookup");
        Ok(found)
    }
}
