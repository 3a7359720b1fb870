//! External judge systems and account bindings

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An external judge (Codeforces, AtCoder, ...)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Judge {
    pub id: i32,
    pub name: String,
    pub is_enable: bool,
}

/// A user's account handle on one judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct JudgeAccount {
    pub username: String,
    pub judge_id: i32,
    pub handle: String,
}
