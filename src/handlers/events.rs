//! Club event handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_EVENT_MARKDOWN_SIZE,
    db::repositories::EventRepository,
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::Event,
    state::AppState,
};

/// Create event request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Update event request; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    /// Markdown write-up, filled in after the event
    #[validate(length(max = MAX_EVENT_MARKDOWN_SIZE))]
    pub markdown: Option<String>,
    pub is_enable: Option<bool>,
}

/// List enabled events
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepository::list(state.db()).await?;
    Ok(Json(events))
}

/// One event with its markdown body
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Event>> {
    let event = EventRepository::find_by_id(state.db(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("event {id}")))?;
    Ok(Json(event))
}

/// Create an event
async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<Event>)> {
    payload.validate()?;
    if payload.end_time < payload.start_time {
        return Err(AppError::Validation(
            "end_time must not precede start_time".to_string(),
        ));
    }
    let event =
        EventRepository::create(state.db(), &payload.name, payload.start_time, payload.end_time)
            .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event
async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventRequest>,
) -> AppResult<Json<Event>> {
    payload.validate()?;
    let event = EventRepository::update(
        state.db(),
        id,
        payload.name.as_deref(),
        payload.markdown.as_deref(),
        payload.is_enable,
    )
    .await?;
    Ok(Json(event))
}

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/{id}", get(get_event))
        .route("/{id}", put(update))
}
