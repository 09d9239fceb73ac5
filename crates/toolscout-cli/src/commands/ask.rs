//! One-shot research from the terminal.

use anyhow::Result;
use clap::Args;

use super::WorkflowArgs;

#[derive(Args)]
pub struct AskArgs {
    /// Developer tool category to research
    pub query: String,

    #[command(flatten)]
    pub workflow: WorkflowArgs,
}

/// Print the same markdown document the web UI would show.
pub async fn execute(args: AskArgs) -> Result<()> {
    let handler = args.workflow.handler()?;
    let markdown = handler.handle(&args.query).await;
    println!("{}", markdown);
    Ok(())
}
