//! Run configuration: CLI flags layered over the environment.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::Cli;
use crate::data::fred::BASE_URL;
use crate::error::{AppError, EXIT_CONFIG};

pub const API_KEY_VAR: &str = "FRED_API_KEY";
pub const BASE_URL_VAR: &str = "FRED_BASE_URL";

/// Everything one extraction pass needs.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub api_key: String,
    pub base_url: String,
    pub series_ids: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub output_dir: PathBuf,
}

/// Values read from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl EnvOverrides {
    /// Load `.env` (if present) and read the FRED variables.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_key: non_empty(std::env::var(API_KEY_VAR).ok()),
            base_url: non_empty(std::env::var(BASE_URL_VAR).ok()),
        }
    }
}

impl ExtractConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        Self::resolve(cli, EnvOverrides::load(), Local::now().date_naive())
    }

    /// Combine flags and environment; flags take precedence.
    pub fn resolve(cli: &Cli, env: EnvOverrides, today: NaiveDate) -> Result<Self, AppError> {
        let api_key = non_empty(cli.api_key.clone())
            .or(env.api_key)
            .ok_or_else(|| AppError::new(EXIT_CONFIG, format!("Missing {API_KEY_VAR} (set it in the environment, .env, or pass --api-key).")))?;

        let base_url = non_empty(cli.base_url.clone())
            .or(env.base_url)
            .unwrap_or_else(|| BASE_URL.to_string());

        let series_ids: Vec<String> = cli
            .series
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if series_ids.is_empty() {
            return Err(AppError::new(EXIT_CONFIG, "No series ids given."));
        }

        let (start_date, end_date) = if cli.unbounded {
            (None, None)
        } else {
            let end = cli.end.unwrap_or(today);
            if cli.start > end {
                return Err(AppError::new(
                    EXIT_CONFIG,
                    format!("Start date {} is after end date {end}.", cli.start),
                ));
            }
            (Some(cli.start), Some(end))
        };

        Ok(Self {
            api_key,
            base_url,
            series_ids,
            start_date,
            end_date,
            output_dir: cli.output_dir.clone(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
