//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
///
/// Scraped from external judges. `username` is the club username resolved
/// from the judge account at ingest time; `sid` is the judge-side
/// submission id used for de-duplication.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub username: String,
    pub judge_id: i32,
    /// Judge the account belongs to (may differ from `judge_id` when a
    /// judge mirrors another's archive)
    pub account_judge_id: i32,
    pub sid: String,
    pub problem_id: String,
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
}
