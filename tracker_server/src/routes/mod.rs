//! HTTP routes for the exercise tracker API.

pub mod logs;
pub mod users;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use tracker_core::ExerciseStore;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/{id}/exercises", post(logs::create_exercise))
        .route("/api/users/{id}/logs", get(logs::get_log))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run a store operation on the blocking pool
///
/// The store does synchronous, locked file I/O, so it must not run on the
/// async worker threads.
pub(crate) async fn with_store<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&ExerciseStore) -> tracker_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    let outcome = tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::internal(format!("Store task failed: {e}")))?;
    outcome.map_err(ApiError::from)
}
