//! HTTP client for a remote research service.
//!
//! Sends `POST {base_url}/research` with `{"query": "..."}` and expects a
//! JSON `ResearchResult` (or `null`) back.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::Workflow;
use crate::error::{ScoutError, ScoutResult};
use crate::model::ResearchResult;

/// Default research service URL.
pub const DEFAULT_WORKFLOW_URL: &str = "http://127.0.0.1:8000";

/// Workflow backed by a remote research service.
#[derive(Clone)]
pub struct HttpWorkflow {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ResearchRequest<'a> {
    query: &'a str,
}

impl HttpWorkflow {
    /// Create a client for `base_url`.
    ///
    /// No timeout is applied unless one is given; a slow research run
    /// keeps the request open until it finishes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ScoutResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!(base_url = %base_url, ?timeout, "HttpWorkflow initialized");

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Workflow for HttpWorkflow {
    fn name(&self) -> &str {
        "http"
    }

    async fn run(&self, query: &str) -> ScoutResult<Option<ResearchResult>> {
        let url = format!("{}/research", self.base_url);
        debug!(url = %url, query = %query, "Sending research request");

        let response = self
            .client
            .post(&url)
            .json(&ResearchRequest { query })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(ScoutError::WorkflowStatus { status, body });
        }

        let body = response.bytes().await?;
        let result: Option<ResearchResult> = serde_json::from_slice(&body)?;

        debug!(
            companies = result.as_ref().map_or(0, |r| r.companies.len()),
            "Research response received"
        );

        Ok(result)
    }
}
