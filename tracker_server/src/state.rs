//! Shared server state.
//!
//! The store is the single process-wide dependency; it is passed to handlers
//! explicitly through axum's `State` extractor rather than held as a global,
//! which keeps the filter logic free of I/O and unit-testable.

use std::sync::Arc;
use tracker_core::ExerciseStore;

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ExerciseStore>,
}

impl AppState {
    pub fn new(store: ExerciseStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
