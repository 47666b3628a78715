//! Quote a loan against a market lender CSV
//!
//! Usage: get_quote <CSV_DATA_FILE> <LOAN_AMOUNT> [--config FILE] [--json]

use anyhow::{Context, Result};
use clap::Parser;
use loan_quote::{report, QuoteConfig, QuoteEngine};
use std::path::PathBuf;

/// For a requested loan amount, display a quote based on the lowest annual
/// interest rate from suitable market lenders
#[derive(Debug, Parser)]
#[command(name = "get_quote", version, about)]
struct Args {
    /// Market lender CSV data file
    csv_data_file: PathBuf,

    /// Loan amount in increments of 100
    loan_amount: u32,

    /// JSON file overriding loan limits and term
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuoteConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => QuoteConfig::default(),
    };
    log::debug!("Using {:?}", config);

    let engine = QuoteEngine::new(config);
    let outcome = engine.get_quote(&args.csv_data_file, args.loan_amount)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", report::render_outcome(args.loan_amount, &outcome));
    }
    Ok(())
}
