//! One extraction pass: fetch every configured series, then persist the set.
//!
//! Kept separate from `app::run` so the whole pass runs in tests against a
//! stub endpoint without touching argv or the environment.

use std::path::PathBuf;

use chrono::Local;

use crate::config::ExtractConfig;
use crate::data::FredClient;
use crate::domain::ResultSet;
use crate::error::AppError;
use crate::io::{save_json, timestamped_output_path};

/// Outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: ResultSet,
    pub output_path: PathBuf,
}

/// Fetch all series in `config` and write them to a timestamped file.
///
/// Per-series failures only shrink the result set; the only errors returned
/// here come from writing the output file.
pub fn run_extraction(config: &ExtractConfig) -> Result<RunOutput, AppError> {
    let client = FredClient::from_config(config);
    let results = client.fetch_many(&config.series_ids, config.start_date, config.end_date);

    let output_path = timestamped_output_path(&config.output_dir, Local::now().naive_local());
    save_json(&results, &output_path)?;

    Ok(RunOutput {
        results,
        output_path,
    })
}
