//! Rating history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One rated contest entry in a user's rating history on a judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Rating {
    pub username: String,
    pub judge_id: i32,
    pub rating: i32,
    /// Rank in the rated contest; 0 marks an unranked placeholder entry
    pub contest_rank: i32,
    pub contest_time: DateTime<Utc>,
    pub contest_name: String,
    pub contest_url: String,
}
