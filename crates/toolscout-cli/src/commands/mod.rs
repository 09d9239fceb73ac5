//! CLI command definitions and handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use toolscout_core::{workflow::http::DEFAULT_WORKFLOW_URL, ResearchHandler, WorkflowSource};

pub mod ask;
pub mod serve;

/// Developer Tools Research Agent
#[derive(Parser)]
#[command(name = "toolscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the research web UI
    Serve(serve::ServeArgs),

    /// Research a single query and print the markdown report
    Ask(ask::AskArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Ask(args) => ask::execute(args).await,
        }
    }
}

/// Where the research workflow lives.
#[derive(Args, Debug, Clone)]
pub struct WorkflowArgs {
    /// Base URL of the research service
    #[arg(long, env = "TOOLSCOUT_WORKFLOW_URL", default_value = DEFAULT_WORKFLOW_URL)]
    pub workflow_url: String,

    /// Request timeout for the research service, in seconds (none by default)
    #[arg(long, env = "TOOLSCOUT_WORKFLOW_TIMEOUT")]
    pub workflow_timeout: Option<u64>,

    /// Replay recorded results from a JSON file instead of calling the service
    #[arg(long, env = "TOOLSCOUT_FIXTURES")]
    pub fixtures: Option<PathBuf>,
}

impl WorkflowArgs {
    pub fn source(&self) -> WorkflowSource {
        match &self.fixtures {
            Some(path) => WorkflowSource::Fixtures(path.clone()),
            None => WorkflowSource::Remote {
                base_url: self.workflow_url.clone(),
                timeout: self.workflow_timeout.map(Duration::from_secs),
            },
        }
    }

    /// Build the workflow once and wrap it in a request handler.
    pub fn handler(&self) -> Result<Arc<ResearchHandler>> {
        tracing::info!("Initializing research workflow...");
        let workflow = self.source().build()?;
        tracing::info!(workflow = workflow.name(), "Workflow initialized");
        Ok(Arc::new(ResearchHandler::new(workflow)))
    }
}
