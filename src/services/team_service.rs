//! Team service

use sqlx::PgPool;

use crate::{
    db::repositories::{TeamRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::teams::request::CreateTeamRequest,
    models::{Team, TeamGroup},
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// Create a team; every member must be an existing user
    pub async fn create_team(pool: &PgPool, payload: CreateTeamRequest) -> AppResult<Team> {
        if payload.members.is_empty() {
            return Err(AppError::InvalidInput(
                "a team needs at least one member".to_string(),
            ));
        }

        let known = UserRepository::simple_by_usernames(pool, &payload.members).await?;
        if known.len() != payload.members.len() {
            let known: Vec<&str> = known.iter().map(|u| u.username.as_str()).collect();
            let missing: Vec<&str> = payload
                .members
                .iter()
                .map(String::as_str)
                .filter(|m| !known.contains(m))
                .collect();
            return Err(AppError::InvalidInput(format!(
                "unknown members: {}",
                missing.join(", ")
            )));
        }

        TeamRepository::create(pool, &payload.name, &payload.members).await
    }

    /// List teams
    pub async fn list_teams(pool: &PgPool, only_enabled: bool) -> AppResult<Vec<Team>> {
        TeamRepository::list(pool, only_enabled).await
    }

    /// Find one team
    pub async fn get_team(pool: &PgPool, id: i32) -> AppResult<Team> {
        TeamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("team {id}")))
    }

    /// Enable or disable a team
    pub async fn set_enable(pool: &PgPool, id: i32, is_enable: bool) -> AppResult<()> {
        TeamRepository::set_enable(pool, id, is_enable).await
    }

    /// List team groups
    pub async fn list_groups(pool: &PgPool) -> AppResult<Vec<TeamGroup>> {
        TeamRepository::list_groups(pool).await
    }
}
