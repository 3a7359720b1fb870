//! Team management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Team routes (plus team groups)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/teams", get(handler::list_teams))
        .route("/teams", post(handler::create_team))
        .route("/teams/{id}", get(handler::get_team))
        .route("/teams/{id}/enable", put(handler::set_enable))
        .route("/team-groups", get(handler::list_groups))
}
