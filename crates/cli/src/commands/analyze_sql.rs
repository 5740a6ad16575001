//! `analyze-sql`: metrics from a backend query

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use dashlens_core::SqlMetricSource;
use dashlens_infra::BackendClient;
use serde_json::Value;

use super::{run_analysis, ReportArgs};
use crate::context::Context;

/// Arguments for the analyze-sql command
#[derive(Args, Debug)]
pub struct AnalyzeSqlCommand {
    /// SELECT statement returning one row per metric
    #[arg(short, long)]
    pub query: String,

    /// Named query parameter as `name=value`; values that parse as JSON are
    /// sent as such, anything else as a string
    #[arg(short, long = "param")]
    pub params: Vec<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Execute the analyze-sql command
pub async fn execute(ctx: &Context, cmd: AnalyzeSqlCommand) -> Result<()> {
    let client = Arc::new(BackendClient::new(&ctx.config)?);

    let mut source = SqlMetricSource::new(client, cmd.query);
    for raw in &cmd.params {
        let (name, value) = parse_param(raw)?;
        source = source.param(name, value);
    }

    run_analysis(ctx, Arc::new(source), &cmd.report).await
}

fn parse_param(raw: &str) -> Result<(String, Value)> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("query parameter '{raw}' must look like name=value");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("query parameter '{raw}' has no name");
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}
