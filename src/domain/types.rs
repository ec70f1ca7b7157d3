//! Shared domain types.
//!
//! These types are kept serializable so the same structures are:
//!
//! - built in-memory by the extraction client
//! - written to the output JSON file
//! - reloaded later for inspection or comparisons

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date format accepted by the upstream `observation_start`/`observation_end` parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One upstream observation, kept exactly as returned.
///
/// FRED sends `realtime_start`, `realtime_end`, `date` and `value` (values are
/// strings, with `"."` for missing data). Nothing here interprets them.
pub type Observation = serde_json::Map<String, serde_json::Value>;

/// Results of one batch run, keyed by series id.
///
/// A series whose fetch failed is simply absent.
pub type ResultSet = BTreeMap<String, SeriesResult>;

/// A single query against the observations endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub series_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SeriesRequest {
    pub fn new(
        series_id: impl Into<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            series_id: series_id.into(),
            start_date,
            end_date,
        }
    }

    /// Query parameters for this request.
    ///
    /// Date bounds are only present when set; an omitted bound produces no key.
    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("series_id", self.series_id.clone()),
            ("api_key", api_key.to_string()),
            ("file_type", "json".to_string()),
        ];
        if let Some(start) = self.start_date {
            pairs.push(("observation_start", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("observation_end", end.format(DATE_FORMAT).to_string()));
        }
        pairs
    }
}

/// Normalized outcome of one successful series fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    series_id: String,
    extracted_at: NaiveDateTime,
    count: u64,
    observations: Vec<Observation>,
}

impl SeriesResult {
    pub fn new(
        series_id: impl Into<String>,
        extracted_at: NaiveDateTime,
        count: u64,
        observations: Vec<Observation>,
    ) -> Self {
        Self {
            series_id: series_id.into(),
            extracted_at,
            count,
            observations,
        }
    }

    pub fn series_id(&self) -> &str {
        &self.series_id
    }

    pub fn extracted_at(&self) -> NaiveDateTime {
        self.extracted_at
    }

    /// Observation count as reported upstream (not recomputed).
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}
