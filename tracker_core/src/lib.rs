#![forbid(unsafe_code)]

//! Core domain model and business logic for the exercise tracker.
//!
//! This crate provides:
//! - Domain types (users, exercises, per-user logs)
//! - The log filter (date-range filtering and result limiting)
//! - Persistence (JSON document store with file locking)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod filter;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use filter::{
    display_date, filter_log, parse_display_date, parse_query_date, DISPLAY_DATE_FORMAT,
};
pub use store::ExerciseStore;
