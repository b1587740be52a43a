//! HTTP route handlers for the habit API.

use axum::Router;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, put};
use habits::service::{create_habit, delete_habit, list_habits, update_habit};
use habits::{Habit, HabitPatch, NewHabit};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/habits", get(list).post(create))
        .route("/habits/{id}", put(update).delete(remove))
}

/// GET / - embedded form + table page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

/// GET /habits - full collection in stored order.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, ApiError> {
    Ok(Json(list_habits(state.store())?))
}

/// POST /habits - create from `{title, description?, frequency?}`.
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewHabit>, JsonRejection>,
) -> Result<(StatusCode, Json<Habit>), ApiError> {
    let Json(input) = payload?;
    let habit = create_habit(state.store(), input)?;
    Ok((StatusCode::CREATED, Json(habit)))
}

/// PUT /habits/{id} - merge supplied fields into an existing habit.
///
/// A missing body is an empty patch: only `updatedAt` is refreshed.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Habit>, ApiError> {
    let patch = parse_patch(&body)?;
    Ok(Json(update_habit(state.store(), &id, patch)?))
}

fn parse_patch(body: &[u8]) -> Result<HabitPatch, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(HabitPatch::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse the request body as JSON: {}", err),
        )
    })
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    removed: Habit,
}

/// DELETE /habits/{id} - remove one habit and echo it back.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = delete_habit(state.store(), &id)?;
    Ok(Json(DeleteResponse {
        success: true,
        removed,
    }))
}
