//! Judge handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    db::repositories::JudgeRepository,
    error::AppResult,
    models::Judge,
    state::AppState,
};

/// Enabled judges
async fn list_enabled(State(state): State<AppState>) -> AppResult<Json<Vec<Judge>>> {
    let judges = JudgeRepository::list_enabled(state.db()).await?;
    Ok(Json(judges))
}

/// All judges, disabled ones included
async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Judge>>> {
    let judges = JudgeRepository::list_all(state.db()).await?;
    Ok(Json(judges))
}

/// Judge routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enabled))
        .route("/all", get(list_all))
}
