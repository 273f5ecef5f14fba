use anyhow::{Context, Result};
use audit_logging::audit_info;
use clap::Parser;

use urlaudit_app::cli::Cli;
use urlaudit_app::{logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose, cli.log_file.as_deref());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let summary = runtime.block_on(run(&cli))?;

    audit_info!(
        "Checked {} urls, wrote {} lines, {} transport failures, {:.1}s",
        summary.items,
        summary.lines,
        summary.transport_failures,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
