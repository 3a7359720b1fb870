//! Submission repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

use crate::{error::AppResult, models::Submission};

/// One submission as reported by a scraper, before account resolution
#[derive(Debug, Clone)]
pub struct ScrapedSubmission {
    pub judge_id: i32,
    pub handle: String,
    pub sid: String,
    pub problem_id: String,
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
}

/// Per-day solved/submitted counts for the activity calendar
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub submitted: i64,
    pub solved: i64,
}

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Insert resolved submissions; duplicates on (judge_id, sid) are
    /// skipped so overlapping scrape windows are harmless.
    pub async fn bulk_insert(pool: &PgPool, submissions: &[Submission]) -> AppResult<u64> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for s in submissions {
            let result = sqlx::query(
                r#"
                INSERT INTO submissions
                    (username, judge_id, account_judge_id, sid, problem_id, is_accepted, create_time)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (judge_id, sid) DO NOTHING
                "#,
            )
            .bind(&s.username)
            .bind(s.judge_id)
            .bind(s.account_judge_id)
            .bind(&s.sid)
            .bind(&s.problem_id)
            .bind(s.is_accepted)
            .bind(s.create_time)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// All submissions touching a contest's problem set, regardless of
    /// when they were made (upsolves included)
    pub async fn for_problems(
        pool: &PgPool,
        judge_id: i32,
        problem_ids: &[String],
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE judge_id = $1 AND problem_id = ANY($2)
            ORDER BY create_time
            "#,
        )
        .bind(judge_id)
        .bind(problem_ids)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Daily submitted/solved counts for one user over a date range
    pub async fn daily_counts(
        pool: &PgPool,
        username: &str,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<DailyCount>> {
        let counts = sqlx::query_as::<_, DailyCount>(
            r#"
            SELECT
                create_time::date AS day,
                COUNT(*) AS submitted,
                COUNT(*) FILTER (WHERE is_accepted) AS solved
            FROM submissions
            WHERE username = $1 AND create_time >= $2 AND create_time < $3
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(username)
        .bind(begin)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }
}
