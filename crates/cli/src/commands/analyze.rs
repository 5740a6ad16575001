//! `analyze`: metrics from a JSON file

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use dashlens_infra::JsonFileMetricSource;

use super::{run_analysis, ReportArgs};
use crate::context::Context;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// JSON file with a list of metrics or `{ "metrics": [...] }`
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Execute the analyze command
pub async fn execute(ctx: &Context, cmd: AnalyzeCommand) -> Result<()> {
    let source = Arc::new(JsonFileMetricSource::new(cmd.input));
    run_analysis(ctx, source, &cmd.report).await
}
