//! Session authentication extractors
//!
//! Sessions are opaque tokens in a cookie, looked up in Redis. Auth
//! internals stay deliberately thin: the token maps straight to a
//! username, everything else comes from the users table.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{SESSION_COOKIE_NAME, SESSION_KEY_PREFIX},
    db::repositories::UserRepository,
    error::AppError,
    state::AppState,
};

/// Authenticated user resolved from the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub is_admin: bool,
}

/// Extractor that additionally rejects non-admin sessions
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

fn session_token(parts: &Parts) -> Option<String> {
    let cookies = parts.headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE_NAME).then(|| value.to_string())
    })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let Some(token) = session_token(parts) else {
            debug!(path = %path, "Auth failed: no session cookie");
            return Err(AppError::Unauthorized);
        };

        let mut redis = state.redis();
        let username: Option<String> =
            redis.get(format!("{SESSION_KEY_PREFIX}{token}")).await?;
        let Some(username) = username else {
            debug!(path = %path, "Auth failed: unknown or expired session");
            return Err(AppError::Unauthorized);
        };

        let user = UserRepository::find_by_username(state.db(), &username)
            .await?
            .ok_or(AppError::Unauthorized)?;
        if !user.is_enable {
            debug!(path = %path, username = %username, "Auth failed: user disabled");
            return Err(AppError::Unauthorized);
        }

        Ok(AuthenticatedUser {
            username: user.username,
            is_admin: user.is_admin,
        })
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Forbidden("admin only".to_string()));
        }
        Ok(AdminUser(user))
    }
}
