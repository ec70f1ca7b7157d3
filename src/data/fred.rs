//! FRED API integration: series observations endpoint.

use chrono::{Local, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::ExtractConfig;
use crate::domain::{Observation, ResultSet, SeriesRequest, SeriesResult};
use crate::error::{AppError, EXIT_UPSTREAM};

pub const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Blocking client for the observations endpoint.
///
/// Every fetch is independent: failures are logged and turned into a missing
/// result so one bad series never stops the rest of a batch.
pub struct FredClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different observations endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(config.api_key.clone()).with_base_url(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one series; `None` when the request or its decoding failed.
    pub fn fetch_series(
        &self,
        series_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Option<SeriesResult> {
        self.fetch(&SeriesRequest::new(series_id, start_date, end_date))
    }

    pub fn fetch(&self, request: &SeriesRequest) -> Option<SeriesResult> {
        match self.try_fetch(request) {
            Ok(result) => {
                info!(
                    series_id = %result.series_id(),
                    count = result.count(),
                    "extracted {} observations for {}",
                    result.count(),
                    result.series_id()
                );
                Some(result)
            }
            Err(err) => {
                error!(series_id = %request.series_id, "error extracting {}: {err}", request.series_id);
                None
            }
        }
    }

    /// Fetch each series in order, keeping only the ones that succeeded.
    pub fn fetch_many<S: AsRef<str>>(
        &self,
        series_ids: &[S],
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> ResultSet {
        let mut results = ResultSet::new();
        for series_id in series_ids {
            let series_id = series_id.as_ref();
            info!(series_id, "extracting {series_id}");
            if let Some(result) = self.fetch_series(series_id, start_date, end_date) {
                results.insert(series_id.to_string(), result);
            }
        }
        results
    }

    fn try_fetch(&self, request: &SeriesRequest) -> Result<SeriesResult, AppError> {
        // Errors are rendered without the URL: it carries the api key.
        let resp = self
            .client
            .get(&self.base_url)
            .query(&request.query_pairs(&self.api_key))
            .send()
            .map_err(|e| AppError::new(EXIT_UPSTREAM, format!("FRED request failed: {}", e.without_url())))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                EXIT_UPSTREAM,
                format!("FRED request failed with status {}.", resp.status()),
            ));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| AppError::new(EXIT_UPSTREAM, format!("Failed to parse FRED response: {}", e.without_url())))?;

        Ok(SeriesResult::new(
            request.series_id.clone(),
            Local::now().naive_local(),
            body.count.unwrap_or_default(),
            body.observations.unwrap_or_default(),
        ))
    }
}

/// Upstream body; an explicit `null` is treated like a missing key.
#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    observations: Option<Vec<Observation>>,
}
