//! `fred-extract` library crate.
//!
//! The binary (`fred-extract`) is a thin wrapper around this library so that:
//!
//! - the extraction client is testable without spawning processes
//! - the client and JSON helpers are reusable from other tools

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
