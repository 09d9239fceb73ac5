//! Research result domain models.
//!
//! These mirror the structured output of the research workflow. They are
//! read-only from the point of view of this crate: the presenter borrows
//! them and never mutates them.

use serde::{Deserialize, Serialize};

/// Description value the workflow emits when it could not extract one.
pub const FAILED_DESCRIPTION: &str = "Failed";

/// Final output of one research run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub query: String,
    /// Free-form recommendation written by the analysis step.
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub companies: Vec<ToolEntry>,
}

impl ResearchResult {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            analysis: None,
            companies: Vec::new(),
        }
    }

    /// Analysis text, if present and non-empty.
    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref().filter(|a| !a.is_empty())
    }
}

/// One researched developer tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolEntry {
    pub name: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub pricing_model: String,
    pub is_open_source: TriState,
    pub api_available: TriState,
    pub tech_stack: Vec<String>,
    pub language_support: Vec<String>,
    pub integration_capabilities: Vec<String>,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Website URL, if present and non-empty.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref().filter(|w| !w.is_empty())
    }

    /// Description, treating empty text and the `"Failed"` sentinel as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty() && *d != FAILED_DESCRIPTION)
    }
}

/// A yes/no fact the workflow may not have been able to establish.
///
/// Serialized as a nullable boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    True,
    False,
    #[default]
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::True,
            Some(false) => TriState::False,
            None => TriState::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }
}
