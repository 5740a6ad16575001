//! DashLens CLI
//!
//! Analyze dashboard metrics from a JSON file or a backend SQL query and
//! print the findings.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

use cli::{Cli, Commands};
use context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let ctx = Context::new(&cli)?;

    match cli.command {
        Commands::Analyze(cmd) => commands::analyze::execute(&ctx, cmd).await,
        Commands::AnalyzeSql(cmd) => commands::analyze_sql::execute(&ctx, cmd).await,
        Commands::Health => commands::health::execute(&ctx).await,
        Commands::Config(cmd) => commands::config::execute(&ctx, cmd),
    }
}
