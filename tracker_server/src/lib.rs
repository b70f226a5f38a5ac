#![forbid(unsafe_code)]

//! Axum HTTP server for the exercise tracker.
//!
//! Thin glue over `tracker_core`: route handlers validate input, call the
//! store, and shape JSON responses. All domain logic lives in the core crate.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
