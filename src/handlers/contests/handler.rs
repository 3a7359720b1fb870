//! Contest handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AdminUser,
    models::ContestGroup,
    services::{ContestService, StandingsService},
    state::AppState,
};

use super::{
    request::{CreateContestRequest, SetTeamsRequest, UpdateContestRequest},
    response::{ContestDetailResponse, ContestResponse, OverviewRow},
};

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;
    let contest = ContestService::create_contest(state.db(), payload).await?;
    let response = ContestService::response_of(state.db(), contest).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a contest with its full standings
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ContestDetailResponse>> {
    let (contest, standings) = StandingsService::standings_of(state.db(), id).await?;
    let contest = ContestService::response_of(state.db(), contest).await?;
    Ok(Json(ContestDetailResponse { contest, standings }))
}

/// Update a contest
pub async fn update_contest(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    payload.validate()?;
    let contest = ContestService::update_contest(state.db(), id, payload).await?;
    Ok(Json(ContestService::response_of(state.db(), contest).await?))
}

/// Register teams for a contest
pub async fn set_teams(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(payload): Json<SetTeamsRequest>,
) -> AppResult<StatusCode> {
    ContestService::set_teams(state.db(), id, &payload.team_ids, &payload.usernames).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Publish a scrape task to re-fetch this contest from its judge
pub async fn refresh_contest(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    ContestService::refresh_contest(&state, id).await?;
    Ok(StatusCode::ACCEPTED)
}

/// List contest groups
pub async fn list_groups(State(state): State<AppState>) -> AppResult<Json<Vec<ContestGroup>>> {
    let groups = ContestService::list_groups(state.db()).await?;
    Ok(Json(groups))
}

/// Contests in one group
pub async fn group_contests(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::contests_in_group(state.db(), id).await?;
    Ok(Json(contests))
}

/// Per-user solved/upsolved totals across a group
pub async fn group_overview(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<OverviewRow>>> {
    let rows = ContestService::group_overview(state.db(), id).await?;
    Ok(Json(rows))
}
