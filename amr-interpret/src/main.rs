//! amr-interpret - batch breakpoint interpretation CLI
//!
//! Reads a JSON array of AST result rows, validates it, runs the batch
//! interpretation driver, and writes the enriched rows (plus a summary)
//! back out as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use amr_common::config::EngineConfig;
use amr_interpret::pipeline::{self, RawAstRow};
use amr_interpret::BatchDriver;

#[derive(Parser, Debug)]
#[command(name = "amr-interpret", about = "Breakpoint interpretation for AST datasets")]
struct Args {
    /// JSON file containing an array of AST result rows
    input: PathBuf,

    /// Where to write the enriched rows (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Default guideline for rows that do not declare one (CLSI or EUCAST)
    #[arg(long)]
    guideline: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = EngineConfig::resolve(args.guideline.as_deref(), args.config.as_deref())?;
    info!(default_guideline = %config.default_guideline, "engine configured");

    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let raw_rows: Vec<RawAstRow> =
        serde_json::from_str(&contents).context("input is not a JSON array of AST rows")?;
    info!(rows = raw_rows.len(), "loaded input rows");

    let rows = match pipeline::validate_rows(&raw_rows, None) {
        Ok(rows) => rows,
        Err(issues) => {
            for issue in &issues {
                warn!("{}", issue);
            }
            bail!("upload validation failed with {} issue(s)", issues.len());
        }
    };

    let driver = BatchDriver::new(config.default_guideline);
    let report = driver.interpret_batch(rows);

    info!(
        auto_interpreted = report.summary.auto_interpreted,
        already_reported = report.summary.already_reported,
        missing_measurement = report.summary.missing_measurement,
        failed = report.summary.failed,
        "interpretation summary"
    );

    let json = serde_json::to_string_pretty(&report)?;
    match args.output {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
