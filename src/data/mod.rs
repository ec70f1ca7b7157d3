//! Upstream data sources.

pub mod fred;

#[cfg(test)]
pub(crate) mod stub;

pub use fred::FredClient;
