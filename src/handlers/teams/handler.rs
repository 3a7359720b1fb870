//! Team handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AdminUser,
    models::{Team, TeamGroup},
    services::TeamService,
    state::AppState,
};

use super::request::{CreateTeamRequest, EnableRequest, ListTeamsQuery};

/// List teams with rosters
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<ListTeamsQuery>,
) -> AppResult<Json<Vec<Team>>> {
    let teams = TeamService::list_teams(state.db(), query.only_enabled.unwrap_or(true)).await?;
    Ok(Json(teams))
}

/// Create a team
pub async fn create_team(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<Team>)> {
    payload.validate()?;
    let team = TeamService::create_team(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Get one team
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Team>> {
    let team = TeamService::get_team(state.db(), id).await?;
    Ok(Json(team))
}

/// Enable or disable a team
pub async fn set_enable(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(payload): Json<EnableRequest>,
) -> AppResult<StatusCode> {
    TeamService::set_enable(state.db(), id, payload.is_enable).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List team groups
pub async fn list_groups(State(state): State<AppState>) -> AppResult<Json<Vec<TeamGroup>>> {
    let groups = TeamService::list_groups(state.db()).await?;
    Ok(Json(groups))
}
