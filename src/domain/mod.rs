//! Domain types used throughout the extraction run.
//!
//! This module defines:
//!
//! - the per-series query (`SeriesRequest`)
//! - the normalized per-series outcome (`SeriesResult`)
//! - the batch collection (`ResultSet`)

pub mod types;

pub use types::*;
