//! Team models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::UserSimple;

/// Team database model
///
/// A team is either a contest roster or, when `is_self` is set, the
/// single-member team standing in for one user's individual record. Every
/// user owns exactly one self team.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub is_enable: bool,
    pub is_self: bool,
    #[sqlx(skip)]
    #[serde(default)]
    pub members: Vec<UserSimple>,
}

/// Grouping of teams; `is_grade` groups double as the official member roster
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamGroup {
    pub id: i32,
    pub name: String,
    pub is_grade: bool,
}
