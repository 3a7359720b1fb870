//! Contest management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Contest routes (plus contest groups)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contests", post(handler::create_contest))
        .route("/contests/{id}", get(handler::get_contest))
        .route("/contests/{id}", put(handler::update_contest))
        .route("/contests/{id}/teams", put(handler::set_teams))
        .route("/contests/{id}/refresh", post(handler::refresh_contest))
        .route("/contest-groups", get(handler::list_groups))
        .route("/contest-groups/{id}/contests", get(handler::group_contests))
        .route("/contest-groups/{id}/overview", get(handler::group_overview))
}
