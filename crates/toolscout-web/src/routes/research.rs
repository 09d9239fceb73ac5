//! Research route handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchResponse {
    /// One of `invalid_query`, `empty`, `completed`, `failed`.
    pub status: String,
    pub markdown: String,
    pub html: String,
}

/// POST /api/research - Run one research request.
///
/// Always answers 200; workflow failures are part of the rendered document.
pub async fn research(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Json<ResearchResponse> {
    let outcome = state.handler.research(&req.query).await;
    let markdown = outcome.to_markdown();
    let html = markdown::to_html(&markdown);

    Json(ResearchResponse {
        status: outcome.kind().to_string(),
        markdown,
        html,
    })
}
