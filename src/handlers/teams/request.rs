//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TEAM_NAME_LENGTH;

/// Create team request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub name: String,

    /// Usernames of the roster, at least one
    #[validate(length(min = 1))]
    pub members: Vec<String>,
}

/// Enable flag request
#[derive(Debug, Deserialize)]
pub struct EnableRequest {
    pub is_enable: bool,
}

/// List teams query parameters
#[derive(Debug, Deserialize)]
pub struct ListTeamsQuery {
    pub only_enabled: Option<bool>,
}
