//! Research page route handlers.
//!
//! Serves the single-page UI: query box, submit button, example queries
//! and the results area.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    input_label: &'a str,
    placeholder: &'a str,
    button_label: &'a str,
    examples: &'a [String],
}

/// GET / - Serve the research page.
pub async fn index(State(state): State<AppState>) -> Response {
    let page = &state.page;
    let template = IndexTemplate {
        title: &page.title,
        subtitle: &page.subtitle,
        input_label: &page.input_label,
        placeholder: &page.placeholder,
        button_label: &page.button_label,
        examples: &page.examples,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render research page");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /api/examples - Example queries.
pub async fn examples(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.page.examples.clone())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use crate::test_support::send;

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, 200);
        assert!(body.contains("Developer Tools Research Agent"));
        assert!(body.contains(r#"id="query""#));
        assert!(body.contains("Start Research"));
        assert!(body.contains("open source logging tools"));
        assert!(body.contains("/api/research"));
    }

    #[tokio::test]
    async fn test_examples() {
        let (status, body) =
            send(Request::get("/api/examples").body(Body::empty()).unwrap()).await;
        assert_eq!(status, 200);
        let examples: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(
            examples,
            vec![
                "vector databases",
                "open source logging tools",
                "javascript frameworks for backend",
            ]
        );
    }
}
