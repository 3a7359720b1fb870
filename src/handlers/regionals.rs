//! Onsite regional handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::repositories::{RegionalRepository, TeamRepository},
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::{Regional, RegionalAward, Team},
    state::AppState,
};

/// Create regional request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRegionalRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub date: NaiveDate,
}

/// One award in a batch
#[derive(Debug, Deserialize)]
pub struct AwardBody {
    pub team_id: i32,
    /// 0 none, 1 gold, 2 silver, 3 bronze
    pub medal: i32,
    pub award: String,
}

/// Regional detail with awards and awarded teams
#[derive(Debug, Serialize)]
pub struct RegionalDetailResponse {
    #[serde(flatten)]
    pub regional: Regional,
    pub awards: Vec<RegionalAward>,
    pub teams: Vec<Team>,
}

/// List regionals
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Regional>>> {
    let regionals = RegionalRepository::list(state.db()).await?;
    Ok(Json(regionals))
}

/// One regional with its awards
async fn get_regional(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RegionalDetailResponse>> {
    let regional = RegionalRepository::find_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("regional {id}")))?;
    let awards = RegionalRepository::awards_for(state.db(), id).await?;

    let mut teams = Vec::with_capacity(awards.len());
    for award in &awards {
        if let Some(team) = TeamRepository::find_by_id(state.db(), award.team_id).await? {
            teams.push(team);
        }
    }

    Ok(Json(RegionalDetailResponse {
        regional,
        awards,
        teams,
    }))
}

/// Create a regional
async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateRegionalRequest>,
) -> AppResult<(StatusCode, Json<Regional>)> {
    payload.validate()?;
    let regional = RegionalRepository::create(state.db(), &payload.name, payload.date).await?;
    Ok((StatusCode::CREATED, Json(regional)))
}

/// Record awards for a regional
async fn add_awards(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(payload): Json<Vec<AwardBody>>,
) -> AppResult<StatusCode> {
    RegionalRepository::find_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("regional {id}")))?;

    let awards: Vec<RegionalAward> = payload
        .into_iter()
        .map(|a| RegionalAward {
            regional_id: id,
            team_id: a.team_id,
            medal: a.medal,
            award: a.award,
        })
        .collect();
    RegionalRepository::add_awards(state.db(), id, &awards).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Regional routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/{id}", get(get_regional))
        .route("/{id}/awards", post(add_awards))
}
