//! Submission ingest handlers
//!
//! The write path for scraper workers: raw account-level submissions in,
//! attribution to club users handled server-side.

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    db::repositories::ScrapedSubmission,
    error::AppResult,
    middleware::auth::AdminUser,
    services::SubmissionService,
    state::AppState,
};

/// One scraped submission as reported by a worker
#[derive(Debug, Deserialize)]
pub struct ScrapedSubmissionBody {
    pub handle: String,
    pub sid: String,
    pub problem_id: String,
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
    /// Judge namespace of the problem; defaults to the account's judge
    pub judge_id: Option<i32>,
}

/// Bulk ingest request
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub judge_id: i32,
    pub submissions: Vec<ScrapedSubmissionBody>,
}

/// Ingest result counts
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub inserted: u64,
    pub skipped: usize,
}

/// Refresh request; defaults to the last 24 hours
#[derive(Debug, Deserialize, Default)]
pub struct RefreshRequest {
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Bulk ingest scraped submissions
async fn ingest(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<IngestRequest>,
) -> AppResult<Json<IngestResponse>> {
    let account_judge = payload.judge_id;
    let scraped: Vec<ScrapedSubmission> = payload
        .submissions
        .into_iter()
        .map(|s| ScrapedSubmission {
            judge_id: s.judge_id.unwrap_or(account_judge),
            handle: s.handle,
            sid: s.sid,
            problem_id: s.problem_id,
            is_accepted: s.is_accepted,
            create_time: s.create_time,
        })
        .collect();

    let (inserted, skipped) = SubmissionService::ingest(state.db(), account_judge, scraped).await?;
    Ok(Json(IngestResponse { inserted, skipped }))
}

/// Publish submission refresh tasks for all bound accounts
async fn refresh(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<StatusCode> {
    let end = payload.end.unwrap_or_else(Utc::now);
    let begin = payload.begin.unwrap_or(end - Duration::hours(24));
    SubmissionService::refresh(&state, begin, end).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(ingest))
        .route("/refresh", post(refresh))
}
