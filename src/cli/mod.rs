//! Command-line parsing for the FRED extractor.
//!
//! Every flag has a default, so a bare `fred-extract` performs a full
//! extraction pass. Flags only override the defaults.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

pub const DEFAULT_SERIES: [&str; 5] = ["GDP", "UNRATE", "CPIAUCSL", "FEDFUNDS", "DEXTHUS"];
pub const DEFAULT_START: &str = "2020-01-01";
pub const DEFAULT_OUTPUT_DIR: &str = "data/raw";

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(name = "fred-extract", version, about = "Extract FRED time series to a JSON file")]
pub struct Cli {
    /// Comma-separated FRED series ids.
    #[arg(short = 's', long, value_delimiter = ',', default_values = DEFAULT_SERIES)]
    pub series: Vec<String>,

    /// First observation date (YYYY-MM-DD).
    #[arg(long, default_value = DEFAULT_START)]
    pub start: NaiveDate,

    /// Last observation date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Request each series' full history (no date bounds sent).
    #[arg(long, conflicts_with = "end")]
    pub unbounded: bool,

    /// Directory for the timestamped output file.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// FRED API key. Falls back to `FRED_API_KEY` (environment or `.env`).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Observations endpoint. Falls back to `FRED_BASE_URL`, then the public API.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log verbosity when `RUST_LOG` is unset.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
