//! `/api/users` endpoints: registration and listing.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracker_core::User;

use super::with_store;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for POST /api/users
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
}

/// GET /api/users
///
/// All registered users in registration order.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = with_store(&state, |store| store.list_users()).await?;
    Ok(Json(users))
}

/// POST /api/users
///
/// Registers a user and provisions their empty exercise log.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> ApiResult<Json<User>> {
    let username = body.username.trim().to_string();
    if username.is_empty() {
        return Err(ApiError::bad_request("username is required"));
    }

    let user = with_store(&state, move |store| store.create_user(&username)).await?;
    Ok(Json(user))
}
