//! Write extraction results to JSON files.
//!
//! Output is pretty-printed so files are easy to diff and read by hand. An
//! existing file at the target path is replaced.

use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{AppError, EXIT_CONFIG, EXIT_OUTPUT};

/// `dir/fred_data_YYYYMMDD_HHMMSS.json` for a run started at `now`.
pub fn timestamped_output_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    dir.join(format!("fred_data_{}.json", now.format("%Y%m%d_%H%M%S")))
}

/// Serialize `value` to `path`, creating missing parent directories first.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), AppError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir).map_err(|e| {
            AppError::new(EXIT_OUTPUT, format!("Failed to create output dir '{}': {e}", dir.display()))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to create output JSON '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to write output JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to write output JSON: {e}")))?;

    info!(path = %path.display(), "data saved to {}", path.display());
    Ok(())
}

/// Read a JSON file written by [`save_json`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Failed to open JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(EXIT_CONFIG, format!("Invalid JSON in '{}': {e}", path.display())))
}
