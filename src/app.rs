//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - resolves configuration (flags, environment, `.env`)
//! - runs one extraction pass and prints the summary

use clap::Parser;

use crate::cli::Cli;
use crate::config::ExtractConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fred-extract` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init(cli.log_level.into());

    let config = ExtractConfig::from_cli(&cli)?;
    print_banner(&config);

    let run = pipeline::run_extraction(&config)?;

    println!("{}", "-".repeat(60));
    println!(
        "Extraction complete! Extracted {} of {} series",
        run.results.len(),
        config.series_ids.len()
    );
    println!("Output: {}", run.output_path.display());
    Ok(())
}

fn print_banner(config: &ExtractConfig) {
    println!("Starting FRED data extraction...");
    println!("Date range: {}", format_range(config));
    println!("Series: {}", config.series_ids.join(", "));
    println!("{}", "-".repeat(60));
}

fn format_range(config: &ExtractConfig) -> String {
    let fmt = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string());
    match (fmt(config.start_date), fmt(config.end_date)) {
        (None, None) => "full history".to_string(),
        (start, end) => format!(
            "{} to {}",
            start.unwrap_or_else(|| "earliest".into()),
            end.unwrap_or_else(|| "latest".into())
        ),
    }
}
