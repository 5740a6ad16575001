//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::analyze::AnalyzeCommand;
use crate::commands::analyze_sql::AnalyzeSqlCommand;
use crate::commands::config::ConfigCommands;

/// DashLens CLI
///
/// Rule-based analysis of BI dashboard metrics: threshold breaches and
/// period-over-period changes.
#[derive(Parser, Debug)]
#[command(name = "dashlens")]
#[command(version)]
#[command(about = "Analyze BI dashboard metrics", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (JSON or TOML); probed in standard locations if omitted
    #[arg(short, long, global = true, env = "DASHLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging regardless of the configuration
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze metrics stored in a JSON file
    Analyze(AnalyzeCommand),

    /// Analyze metrics returned by a backend SQL query
    #[command(name = "analyze-sql", alias = "sql")]
    AnalyzeSql(AnalyzeSqlCommand),

    /// Check that the backend is reachable
    Health,

    /// Inspect the effective configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}
