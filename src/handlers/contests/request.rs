//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_CONTEST_NAME_LENGTH;

/// One problem as submitted with a contest
#[derive(Debug, Deserialize)]
pub struct ProblemSpec {
    pub problem_id: String,
    pub display_index: String,
}

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    pub judge_id: i32,

    /// Contest id on the judge's side
    #[validate(length(min = 1))]
    pub cid: String,

    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    pub start_time: DateTime<Utc>,

    #[validate(range(min = 0))]
    pub duration_minutes: i32,

    pub problems: Vec<ProblemSpec>,
}

/// Update contest request; the problem list is replaced wholesale
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    pub start_time: DateTime<Utc>,

    #[validate(range(min = 0))]
    pub duration_minutes: i32,

    pub problems: Vec<ProblemSpec>,
}

/// Register teams request; individual users enter through their self team
#[derive(Debug, Deserialize)]
pub struct SetTeamsRequest {
    #[serde(default)]
    pub team_ids: Vec<i32>,
    #[serde(default)]
    pub usernames: Vec<String>,
}
