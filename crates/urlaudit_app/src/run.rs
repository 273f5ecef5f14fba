use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use audit_logging::audit_info;
use urlaudit_core::report_lines;
use urlaudit_engine::{dispatch, LogProgressSink, ReqwestProber};

use crate::cli::Cli;
use crate::input::read_work_items;
use crate::output::{write_report, ReportTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub items: usize,
    /// Report lines written, header excluded.
    pub lines: usize,
    pub transport_failures: usize,
    pub elapsed: Duration,
}

/// Read the CSV, check every URL and write the report.
///
/// Input errors abort before any request is made.
pub async fn run(cli: &Cli) -> Result<RunSummary> {
    let started = Instant::now();
    let mode = cli.mode();

    let items = read_work_items(&cli.csv, mode)
        .with_context(|| format!("reading {}", cli.csv.display()))?;
    audit_info!("Loaded {} urls from {}", items.len(), cli.csv.display());
    let total = items.len();

    let prober = ReqwestProber::new(cli.probe_settings()).context("building http client")?;
    let outcomes = dispatch(
        items,
        &cli.dispatch_config(),
        Arc::new(prober),
        Arc::new(LogProgressSink),
    )
    .await?;

    let lines = report_lines(mode, &outcomes);
    let target = ReportTarget::from(cli.output.clone());
    write_report(&target, &lines).context("writing report")?;

    Ok(RunSummary {
        items: total,
        lines: lines.len() - 1,
        transport_failures: outcomes
            .iter()
            .filter(|outcome| outcome.is_transport_failure())
            .count(),
        elapsed: started.elapsed(),
    })
}
