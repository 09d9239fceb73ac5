//! Toolscout Core Library
//!
//! Research result model, markdown presenter, request handling and the
//! workflow abstraction the handler drives.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod presenter;
pub mod workflow;

pub use config::WorkflowSource;
pub use error::{ScoutError, ScoutResult};
pub use handler::{ResearchHandler, ResearchOutcome};
pub use model::{ResearchResult, ToolEntry, TriState};
pub use workflow::Workflow;
