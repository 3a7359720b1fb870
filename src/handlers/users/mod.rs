//! User management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// User routes (plus the member roster view)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users", post(handler::create_user))
        .route("/users/{username}", get(handler::get_user))
        .route("/users/{username}", put(handler::update_user))
        .route("/users/{username}/accounts", get(handler::get_accounts))
        .route("/users/{username}/accounts", put(handler::bind_account))
        .route(
            "/users/{username}/submissions",
            get(handler::submission_calendar),
        )
        .route("/users/{username}/contests", get(handler::user_contests))
        .route("/users/{username}/enable", put(handler::set_enable))
        .route("/users/{username}/admin", put(handler::set_admin))
        .route("/members", get(handler::members))
}
