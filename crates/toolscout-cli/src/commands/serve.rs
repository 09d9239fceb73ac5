//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use toolscout_web::state::PageConfig;

use super::WorkflowArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "7860")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./toolscout.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub workflow: WorkflowArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let handler = args.workflow.handler()?;

    println!();
    println!(
        "  {} {}",
        "Toolscout".cyan().bold(),
        "Research Agent".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Research UI".green(),
        args.host,
        args.port
    );
    println!(
        "  {}          http://{}:{}/api/research",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}     {}",
        "Workflow".green(),
        handler.workflow_name()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    toolscout_web::run_server(handler, PageConfig::default(), &args.host, args.port).await?;

    Ok(())
}
