//! Submission service
//!
//! Ingest is the write path scrapers hit: raw account-level submissions
//! come in, rows attributed to club users come out. Handles with no
//! binding are dropped, they belong to strangers sharing the judge.

use sqlx::PgPool;

use crate::{
    db::repositories::{JudgeRepository, ScrapedSubmission, SubmissionRepository},
    error::AppResult,
    models::Submission,
    state::AppState,
    tasks::scheduler,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Resolve scraped submissions to usernames and store them. Returns
    /// (inserted, skipped) counts.
    pub async fn ingest(
        pool: &PgPool,
        judge_id: i32,
        scraped: Vec<ScrapedSubmission>,
    ) -> AppResult<(u64, usize)> {
        let mut resolved = Vec::with_capacity(scraped.len());
        let mut skipped = 0;

        for s in scraped {
            match JudgeRepository::resolve_handle(pool, judge_id, &s.handle).await? {
                Some(username) => resolved.push(Submission {
                    id: 0,
                    username,
                    judge_id: s.judge_id,
                    account_judge_id: judge_id,
                    sid: s.sid,
                    problem_id: s.problem_id,
                    is_accepted: s.is_accepted,
                    create_time: s.create_time,
                }),
                None => {
                    tracing::debug!(handle = %s.handle, judge_id, "unbound handle, skipping");
                    skipped += 1;
                }
            }
        }

        let inserted = SubmissionRepository::bulk_insert(pool, &resolved).await?;
        Ok((inserted, skipped))
    }

    /// Publish submission refresh tasks for every bound account over a
    /// caller-chosen time range
    pub async fn refresh(
        state: &AppState,
        begin: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> AppResult<usize> {
        scheduler::publish_submission_refresh_range(state.db(), state.task_queue(), begin, end)
            .await
    }
}
