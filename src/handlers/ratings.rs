//! Rating handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::auth::AdminUser,
    models::Rating,
    services::RatingService,
    state::AppState,
};

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub username: String,
    pub judge_id: i32,
}

/// Single-handle refresh request
#[derive(Debug, Deserialize)]
pub struct RefreshHandleRequest {
    pub judge_id: i32,
    pub handle: String,
}

/// Bulk upsert scraped rating histories
async fn upsert(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(entries): Json<Vec<Rating>>,
) -> AppResult<StatusCode> {
    RatingService::upsert(state.db(), entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// One user's rating history on a judge
async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<Rating>>> {
    let ratings = RatingService::history(state.db(), &query.username, query.judge_id).await?;
    Ok(Json(ratings))
}

/// Publish rating refresh tasks for all rated accounts, or one handle
async fn refresh(
    State(state): State<AppState>,
    _admin: AdminUser,
    payload: Option<Json<RefreshHandleRequest>>,
) -> AppResult<StatusCode> {
    match payload {
        Some(Json(req)) => {
            RatingService::refresh_handle(&state, req.judge_id, &req.handle).await?;
        }
        None => {
            RatingService::refresh(&state).await?;
        }
    }
    Ok(StatusCode::ACCEPTED)
}

/// Rating routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", put(upsert))
        .route("/", get(history))
        .route("/refresh", post(refresh))
}
