//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod events;
pub mod health;
pub mod judges;
pub mod ratings;
pub mod regionals;
pub mod submissions;
pub mod teams;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(teams::routes())
        .merge(contests::routes())
        .nest("/submissions", submissions::routes())
        .nest("/ratings", ratings::routes())
        .nest("/regionals", regionals::routes())
        .nest("/events", events::routes())
        .nest("/judges", judges::routes())
}
