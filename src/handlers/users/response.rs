//! User response DTOs

use serde::Serialize;

use crate::models::{Contest, JudgeAccount, RegionalAward, TeamGroup, User};
use crate::standings::StandingRow;

/// Medal counts across all regionals
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedalTally {
    pub gold: i32,
    pub silver: i32,
    pub bronze: i32,
}

/// Full user profile
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub accounts: Vec<JudgeAccount>,
    pub rating: Option<i32>,
    pub medals: MedalTally,
    pub awards: Vec<RegionalAward>,
}

/// One member on the roster view
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub username: String,
    pub nickname: String,
    pub rating: Option<i32>,
    pub medals: MedalTally,
}

/// One grade cohort on the roster view
#[derive(Debug, Serialize)]
pub struct MemberGroupResponse {
    #[serde(flatten)]
    pub group: TeamGroup,
    pub members: Vec<MemberResponse>,
}

/// One contest the user took part in, with their row
#[derive(Debug, Serialize)]
pub struct UserContestResponse {
    pub contest: Contest,
    pub row: StandingRow,
}
