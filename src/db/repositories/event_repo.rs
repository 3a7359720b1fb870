//! Club event repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::Event};

/// Repository for club events
pub struct EventRepository;

impl EventRepository {
    /// List enabled events, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"SELECT * FROM events WHERE is_enable ORDER BY start_time DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Find one event
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// Create an event
    pub async fn create(
        pool: &PgPool,
        name: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, start_time, end_time, is_enable)
            VALUES ($1, $2, $3, true)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Update an event; NULL arguments keep the stored value
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: Option<&str>,
        markdown: Option<&str>,
        is_enable: Option<bool>,
    ) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                name = COALESCE($2, name),
                markdown = COALESCE($3, markdown),
                is_enable = COALESCE($4, is_enable)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(markdown)
        .bind(is_enable)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }
}
