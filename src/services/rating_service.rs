//! Rating service

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    db::repositories::{JudgeRepository, RatingRepository},
    error::AppResult,
    models::Rating,
    state::AppState,
    tasks::{scheduler, ScrapeTask},
};

/// Rating service for business logic
pub struct RatingService;

impl RatingService {
    /// Bulk upsert scraped rating histories, grouped per (username, judge)
    pub async fn upsert(pool: &PgPool, entries: Vec<Rating>) -> AppResult<usize> {
        let mut grouped: HashMap<(String, i32), Vec<Rating>> = HashMap::new();
        for entry in entries {
            grouped
                .entry((entry.username.clone(), entry.judge_id))
                .or_default()
                .push(entry);
        }

        let users = grouped.len();
        for ((username, judge_id), mut history) in grouped {
            history.sort_by_key(|r| r.contest_time);
            RatingRepository::replace_history(pool, &username, judge_id, &history).await?;
        }
        Ok(users)
    }

    /// One user's history on a judge
    pub async fn history(
        pool: &PgPool,
        username: &str,
        judge_id: i32,
    ) -> AppResult<Vec<Rating>> {
        RatingRepository::history_for(pool, username, judge_id).await
    }

    /// Publish rating refresh tasks for the rated judge's accounts
    pub async fn refresh(state: &AppState) -> AppResult<usize> {
        scheduler::publish_rating_refresh(state.db(), state.task_queue()).await
    }

    /// Publish a refresh for one handle on one judge
    pub async fn refresh_handle(state: &AppState, judge_id: i32, handle: &str) -> AppResult<()> {
        JudgeRepository::list_enabled(state.db())
            .await?
            .iter()
            .find(|j| j.id == judge_id)
            .ok_or_else(|| {
                crate::error::AppError::InvalidInput(format!("judge {judge_id} is not enabled"))
            })?;

        state
            .task_queue()
            .publish(
                judge_id,
                &ScrapeTask::Ratings {
                    handle: handle.to_string(),
                },
            )
            .await?;
        Ok(())
    }
}
