//! Request handling: validate the query, run the workflow, render.
//!
//! Every failure raised by the workflow is caught here and turned into a
//! [`ResearchOutcome::Failed`]; nothing propagates to the caller.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::model::ResearchResult;
use crate::presenter;
use crate::workflow::Workflow;

/// Returned for empty or whitespace-only queries.
pub const INVALID_QUERY: &str = "Please enter a valid query.";

/// Result of handling one research request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchOutcome {
    /// The query was empty; the workflow was not called.
    InvalidQuery,
    /// The workflow finished without a result.
    Empty,
    Completed(ResearchResult),
    /// The workflow failed; holds the failure description.
    Failed(String),
}

impl ResearchOutcome {
    /// Stable label for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidQuery => "invalid_query",
            Self::Empty => "empty",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
        }
    }

    /// Render the outcome as the markdown document shown to the user.
    pub fn to_markdown(&self) -> String {
        match self {
            Self::InvalidQuery => INVALID_QUERY.to_string(),
            Self::Empty => presenter::render_results(None),
            Self::Completed(result) => presenter::render_results(Some(result)),
            Self::Failed(details) => error_report(details),
        }
    }
}

/// Error document; `details` goes into a fenced block untouched.
pub fn error_report(details: &str) -> String {
    format!(
        "## 💥 An Error Occurred\n\n**Details:**\n```\n{}\n```",
        details
    )
}

/// Handles research requests against a single long-lived workflow.
///
/// Requests run one at a time: a request waits until the previous one
/// has returned.
pub struct ResearchHandler {
    workflow: Arc<dyn Workflow>,
    running: Mutex<()>,
}

impl ResearchHandler {
    pub fn new(workflow: Arc<dyn Workflow>) -> Self {
        Self {
            workflow,
            running: Mutex::new(()),
        }
    }

    pub fn workflow_name(&self) -> &str {
        self.workflow.name()
    }

    /// Validate `query` and run the workflow on it.
    pub async fn research(&self, query: &str) -> ResearchOutcome {
        if query.trim().is_empty() {
            return ResearchOutcome::InvalidQuery;
        }

        info!(query = %query, workflow = self.workflow.name(), "Received query");
        let _running = self.running.lock().await;

        match self.workflow.run(query).await {
            Ok(Some(result)) => {
                info!(companies = result.companies.len(), "Research completed");
                ResearchOutcome::Completed(result)
            }
            Ok(None) => {
                info!("Research produced no result");
                ResearchOutcome::Empty
            }
            Err(e) => {
                error!(error = %e, "An error occurred");
                ResearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Research `query` and return the markdown to display.
    pub async fn handle(&self, query: &str) -> String {
        self.research(query).await.to_markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ScoutError, ScoutResult};
    use crate::model::ToolEntry;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Records every query and answers with a canned response.
    struct RecordingWorkflow {
        calls: StdMutex<Vec<String>>,
        response: fn(&str) -> ScoutResult<Option<ResearchResult>>,
    }

    impl RecordingWorkflow {
        fn new(response: fn(&str) -> ScoutResult<Option<ResearchResult>>) -> Arc<Self> {
            Arc::new(Self {
                calls: StdMutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Workflow for RecordingWorkflow {
        fn name(&self) -> &str {
            "recording"
        }

        async fn run(&self, query: &str) -> ScoutResult<Option<ResearchResult>> {
            self.calls.lock().unwrap().push(query.to_string());
            (self.response)(query)
        }
    }

    fn echo(query: &str) -> ScoutResult<Option<ResearchResult>> {
        let mut result = ResearchResult::new(query);
        result.companies.push(ToolEntry::new("Qdrant"));
        Ok(Some(result))
    }

    #[tokio::test]
    async fn test_blank_queries_skip_workflow() {
        let workflow = RecordingWorkflow::new(echo);
        let handler = ResearchHandler::new(workflow.clone());

        for query in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(handler.handle(query).await, "Please enter a valid query.");
            assert_eq!(handler.research(query).await, ResearchOutcome::InvalidQuery);
        }
        assert!(workflow.calls().is_empty());
    }

    #[tokio::test]
    async fn test_query_passed_unchanged_once() {
        let workflow = RecordingWorkflow::new(echo);
        let handler = ResearchHandler::new(workflow.clone());

        let output = handler.handle("  vector databases ").await;
        assert_eq!(workflow.calls(), vec!["  vector databases ".to_string()]);
        assert!(output.starts_with("# 📊 Research Results for:   vector databases \n"));
        assert!(output.contains("### 1. Qdrant"));
    }

    #[tokio::test]
    async fn test_workflow_error_is_reported() {
        let workflow = RecordingWorkflow::new(|_| Err(ScoutError::workflow("timeout")));
        let handler = ResearchHandler::new(workflow.clone());

        let outcome = handler.research("ci tools").await;
        assert_eq!(outcome, ResearchOutcome::Failed("timeout".to_string()));
        assert_eq!(outcome.kind(), "failed");
        assert_eq!(
            outcome.to_markdown(),
            "## 💥 An Error Occurred\n\n**Details:**\n```\ntimeout\n```"
        );
        assert_eq!(workflow.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_error_text_is_verbatim() {
        let workflow = RecordingWorkflow::new(|_| {
            Err(ScoutError::workflow("line one\n  *not markdown*  "))
        });
        let handler = ResearchHandler::new(workflow);

        let output = handler.handle("q").await;
        assert!(output.contains("```\nline one\n  *not markdown*  \n```"));
    }

    #[tokio::test]
    async fn test_no_result() {
        let workflow = RecordingWorkflow::new(|_| Ok(None));
        let handler = ResearchHandler::new(workflow);

        let outcome = handler.research("q").await;
        assert_eq!(outcome, ResearchOutcome::Empty);
        assert_eq!(outcome.to_markdown(), "No results to display.");
    }

    #[tokio::test]
    async fn test_requests_are_serialized() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::time::Duration;

        struct SlowWorkflow {
            active: AtomicUsize,
            peak: AtomicUsize,
        }

        #[async_trait]
        impl Workflow for SlowWorkflow {
            fn name(&self) -> &str {
                "slow"
            }

            async fn run(&self, query: &str) -> ScoutResult<Option<ResearchResult>> {
                let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                self.active.fetch_sub(1, Ordering::SeqCst);
                Ok(Some(ResearchResult::new(query)))
            }
        }

        let workflow = Arc::new(SlowWorkflow {
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let handler = Arc::new(ResearchHandler::new(workflow.clone()));

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.research(&format!("q{}", i)).await })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap().kind(), "completed");
        }

        assert_eq!(workflow.peak.load(Ordering::SeqCst), 1);
    }
}
