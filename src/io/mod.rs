//! Input/output helpers.
//!
//! - JSON result files, timestamped output paths (`export`)

pub mod export;

pub use export::*;
