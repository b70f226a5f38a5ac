//! `/api/users/{id}/exercises` and `/api/users/{id}/logs` endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tracker_core::{filter, LogQuery, LogView, NewExercise};

use super::with_store;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for POST /api/users/{id}/exercises
#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub description: String,
    pub duration: u32,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response body for a recorded exercise
///
/// `id` is the owning user's id and `date` the display string the entry was
/// stored with.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: u32,
    pub description: String,
}

/// Raw query parameters for GET /api/users/{id}/logs
///
/// Kept as strings so malformed values surface as the filter's own
/// distinguished errors, not the extractor's.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// POST /api/users/{id}/exercises
///
/// Appends an exercise to the user's log. A missing date stamps the entry
/// with today's local date.
pub async fn create_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateExercise>,
) -> ApiResult<Json<ExerciseResponse>> {
    let description = body.description.trim().to_string();
    if description.is_empty() {
        return Err(ApiError::bad_request("description is required"));
    }

    let date = body
        .date
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(filter::parse_query_date)
        .transpose()?;

    let new = NewExercise {
        description,
        duration: body.duration,
        date,
    };

    let log = with_store(&state, move |store| store.append_exercise(id, new)).await?;

    // The appended entry is the last one; the store just pushed it.
    let entry = log
        .entries
        .last()
        .ok_or_else(|| ApiError::internal("Appended log came back empty"))?;

    Ok(Json(ExerciseResponse {
        id: log.id,
        username: log.username.clone(),
        date: entry.date.clone(),
        duration: entry.duration,
        description: entry.description.clone(),
    }))
}

/// GET /api/users/{id}/logs?from=&to=&limit=
///
/// The user's log filtered per the query; `count` stays the stored total.
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<LogParams>,
) -> ApiResult<Json<LogView>> {
    let query = LogQuery::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;

    let log = with_store(&state, move |store| store.find_log(id)).await?;
    Ok(Json(filter::filter_log(&log, &query)))
}
