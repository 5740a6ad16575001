//! CLI command implementations

pub mod analyze;
pub mod analyze_sql;
pub mod config;
pub mod health;

use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dashlens_core::{AnalysisService, MetricSource, ReportPeriods};
use dashlens_domain::utils::period::ComparisonSpec;
use dashlens_domain::PeriodSpec;

use crate::context::Context;
use crate::output::{format_analyses, OutputFormat};

/// Report options shared by the analyze commands
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// First day of the reporting period (YYYY-MM-DD)
    #[arg(long, requires = "period_end")]
    pub period_start: Option<NaiveDate>,

    /// Last day of the reporting period (YYYY-MM-DD)
    #[arg(long, requires = "period_start")]
    pub period_end: Option<NaiveDate>,

    /// First day of the comparison period; defaults to the preceding span
    #[arg(long, requires = "compare_end")]
    pub compare_start: Option<NaiveDate>,

    /// Last day of the comparison period
    #[arg(long, requires = "compare_start")]
    pub compare_end: Option<NaiveDate>,
}

impl ReportArgs {
    /// Periods for the report header, when any period flag was given
    pub fn periods(&self, today: NaiveDate) -> Result<Option<ReportPeriods>> {
        if self.period_start.is_none() && self.compare_start.is_none() {
            return Ok(None);
        }

        let spec = PeriodSpec {
            start: self.period_start,
            end: self.period_end,
            comparison: self
                .compare_start
                .zip(self.compare_end)
                .map(|(start, end)| ComparisonSpec { start, end }),
        };
        let (current, comparison) = spec.resolve(today)?;
        Ok(Some(ReportPeriods { current, comparison }))
    }
}

/// Collect, classify and print
pub(crate) async fn run_analysis(
    ctx: &Context,
    source: Arc<dyn MetricSource>,
    report: &ReportArgs,
) -> Result<()> {
    let periods = report.periods(Local::now().date_naive())?;
    let service = AnalysisService::new(source, ctx.config.clone());
    let analyses = service.run().await?;

    println!("{}", format_analyses(&analyses, periods.as_ref(), report.format)?);
    Ok(())
}
