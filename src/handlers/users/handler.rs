//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    db::repositories::DailyCount,
    error::AppResult,
    middleware::auth::AdminUser,
    models::{JudgeAccount, User},
    services::{StandingsService, UserService},
    state::AppState,
    utils::day_span,
};

use super::{
    request::{
        AdminRequest, BindAccountRequest, CalendarQuery, CreateUserRequest, EnableRequest,
        ListUsersQuery, UpdateUserRequest,
    },
    response::{MemberGroupResponse, UserContestResponse, UserProfileResponse},
};

/// List users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserService::list_users(state.db(), query.only_enabled.unwrap_or(true)).await?;
    Ok(Json(users))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    payload.validate()?;
    let user = UserService::create_user(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user's full profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserProfileResponse>> {
    let profile = UserService::get_profile(state.db(), &username).await?;
    Ok(Json(profile))
}

/// Update a user's profile
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(username): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    payload.validate()?;
    let user = UserService::update_user(state.db(), &username, payload).await?;
    Ok(Json(user))
}

/// Get a user's account bindings
pub async fn get_accounts(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<JudgeAccount>>> {
    let accounts = UserService::accounts(state.db(), &username).await?;
    Ok(Json(accounts))
}

/// Bind (or re-bind) an account handle
pub async fn bind_account(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(username): Path<String>,
    Json(payload): Json<BindAccountRequest>,
) -> AppResult<StatusCode> {
    payload.validate()?;
    UserService::bind_account(state.db(), &username, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Daily solved/submitted calendar
pub async fn submission_calendar(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<Vec<DailyCount>>> {
    let (begin, end) = day_span(query.begin, query.end);
    let counts = UserService::submission_calendar(state.db(), &username, begin, end).await?;
    Ok(Json(counts))
}

/// The user's standings row in each contest they took part in
pub async fn user_contests(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<UserContestResponse>>> {
    let rows = StandingsService::rows_for_user(state.db(), &username).await?;
    let body = rows
        .into_iter()
        .map(|(contest, row)| UserContestResponse { contest, row })
        .collect();
    Ok(Json(body))
}

/// Enable or disable a user
pub async fn set_enable(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(username): Path<String>,
    Json(payload): Json<EnableRequest>,
) -> AppResult<StatusCode> {
    UserService::set_enable(state.db(), &username, payload.is_enable).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grant or revoke admin
pub async fn set_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(username): Path<String>,
    Json(payload): Json<AdminRequest>,
) -> AppResult<StatusCode> {
    UserService::set_admin(state.db(), &username, payload.is_admin).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Official members grouped by grade
pub async fn members(State(state): State<AppState>) -> AppResult<Json<Vec<MemberGroupResponse>>> {
    let groups = UserService::members(state.db()).await?;
    Ok(Json(groups))
}
