//! User request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 1))]
    pub nickname: String,

    pub is_admin: Option<bool>,
}

/// Update user profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub nickname: Option<String>,

    pub phone: Option<String>,
    pub qq: Option<String>,
    pub t_shirt: Option<String>,
}

/// Bind account handle request
#[derive(Debug, Deserialize, Validate)]
pub struct BindAccountRequest {
    pub judge_id: i32,

    #[validate(length(min = 1))]
    pub handle: String,
}

/// Enable flag request
#[derive(Debug, Deserialize)]
pub struct EnableRequest {
    pub is_enable: bool,
}

/// Admin flag request
#[derive(Debug, Deserialize)]
pub struct AdminRequest {
    pub is_admin: bool,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub only_enabled: Option<bool>,
}

/// Calendar date range query
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}
