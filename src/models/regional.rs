//! Onsite regional contests and awards

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An onsite regional contest (ICPC/CCPC style)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Regional {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
}

/// A team's award at a regional; medal: 0 none, 1 gold, 2 silver, 3 bronze
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RegionalAward {
    pub regional_id: i32,
    pub team_id: i32,
    pub medal: i32,
    pub award: String,
}
