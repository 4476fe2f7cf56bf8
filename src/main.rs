// Allocation-heavy PNG encoding benefits from mimalloc.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Render exploratory charts for the labeled reimbursement case dataset.
///
/// Loads the case file, projects the input/output series, and writes four
/// scatter charts: a three-panel overview of payout against each input,
/// the 5-day and 8-day trip views, and the receipt-suffix diagnostic.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the labeled case file
    #[arg(long, default_value = "public_cases.json")]
    input: PathBuf,

    /// Directory the chart images are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging. Output goes to stderr so the
    // completion message on stdout remains clean for scripting.
    let filter = match cli.verbose {
        0 => EnvFilter::new("reimviz=info,reimviz_plot=info"),
        1 => EnvFilter::new("reimviz=debug,reimviz_plot=debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %cli.input.display(), "cases.loading");
    let file = File::open(&cli.input).with_context(|| {
        format!("failed to open case file {}", cli.input.display())
    })?;

    let charts =
        reimviz_plot::render_charts(BufReader::new(file), &cli.out_dir)
            .context("chart rendering failed")?;

    info!(charts = charts.len(), "analysis.complete");
    println!("Analysis complete. Plots saved in {}.", cli.out_dir.display());
    Ok(())
}
