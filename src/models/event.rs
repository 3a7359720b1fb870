//! Club event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A club event (training camp, onboarding, ...) with an optional
/// markdown write-up filled in afterwards
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub markdown: Option<String>,
    pub is_enable: bool,
}
