//! Toolscout Web Server
//!
//! Axum-based web server for the research page and JSON API.

pub mod markdown;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use toolscout_core::ResearchHandler;
use tower_http::trace::TraceLayer;

use state::{AppState, PageConfig};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/research", post(routes::research::research))
        .route("/examples", get(routes::page::examples))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    handler: Arc<ResearchHandler>,
    page: PageConfig,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(handler, page);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
