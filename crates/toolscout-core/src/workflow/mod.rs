//! The research workflow the request handler drives.
//!
//! The workflow itself (agent orchestration, scraping, analysis) lives
//! outside this crate. Implementations here either talk to a remote
//! research service or replay results from a fixture file.

pub mod fixture;
pub mod http;

use async_trait::async_trait;

use crate::error::ScoutResult;
use crate::model::ResearchResult;

pub use fixture::FixtureWorkflow;
pub use http::HttpWorkflow;

/// A research workflow.
///
/// Uses async_trait so handlers can hold an `Arc<dyn Workflow>`.
#[async_trait]
pub trait Workflow: Send + Sync {
    /// Short identifier used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Research `query`. `Ok(None)` means the workflow finished without
    /// producing a result.
    async fn run(&self, query: &str) -> ScoutResult<Option<ResearchResult>>;
}
