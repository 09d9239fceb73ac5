//! Centralized error types for toolscout.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for toolscout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Failure reported by a workflow, displayed as-is.
    #[error("{0}")]
    Workflow(String),

    #[error("Workflow service error ({status}): {body}")]
    WorkflowStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture file {}: {message}", .path.display())]
    Fixture { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for toolscout operations.
pub type ScoutResult<T> = Result<T, ScoutError>;

impl ScoutError {
    /// Create a workflow error.
    pub fn workflow(msg: impl Into<String>) -> Self {
        Self::Workflow(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_error_is_verbatim() {
        let err = ScoutError::workflow("timeout");
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_status_error_display() {
        let err = ScoutError::WorkflowStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Workflow service error (502): bad gateway");
    }
}
