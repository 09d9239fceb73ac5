//! Application state.

use std::sync::Arc;

use toolscout_core::ResearchHandler;

/// Example queries offered under the search box.
pub const DEFAULT_EXAMPLES: [&str; 3] = [
    "vector databases",
    "open source logging tools",
    "javascript frameworks for backend",
];

/// Static text and examples for the research page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub subtitle: String,
    pub input_label: String,
    pub placeholder: String,
    pub button_label: String,
    pub examples: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "🔬 Developer Tools Research Agent".to_string(),
            subtitle: "An AI-powered agent to analyze and compare developer tools.".to_string(),
            input_label: "Enter a developer tool category to research".to_string(),
            placeholder: "e.g., 'vector databases', 'serverless platforms', 'CI/CD tools'"
                .to_string(),
            button_label: "🚀 Start Research".to_string(),
            examples: DEFAULT_EXAMPLES.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ResearchHandler>,
    pub page: Arc<PageConfig>,
}

impl AppState {
    pub fn new(handler: Arc<ResearchHandler>, page: PageConfig) -> Self {
        Self {
            handler,
            page: Arc::new(page),
        }
    }
}
