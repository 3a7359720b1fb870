//! Rating repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Rating};

/// Repository for rating history operations
pub struct RatingRepository;

impl RatingRepository {
    /// Replace a user's rating history on one judge with a freshly
    /// scraped one
    pub async fn replace_history(
        pool: &PgPool,
        username: &str,
        judge_id: i32,
        entries: &[Rating],
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM ratings WHERE username = $1 AND judge_id = $2"#)
            .bind(username)
            .bind(judge_id)
            .execute(&mut *tx)
            .await?;

        for r in entries {
            sqlx::query(
                r#"
                INSERT INTO ratings
                    (username, judge_id, rating, contest_rank, contest_time, contest_name, contest_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&r.username)
            .bind(r.judge_id)
            .bind(r.rating)
            .bind(r.contest_rank)
            .bind(r.contest_time)
            .bind(&r.contest_name)
            .bind(&r.contest_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// One user's full history on a judge, chronological
    pub async fn history_for(
        pool: &PgPool,
        username: &str,
        judge_id: i32,
    ) -> AppResult<Vec<Rating>> {
        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT * FROM ratings
            WHERE username = $1 AND judge_id = $2
            ORDER BY contest_time
            "#,
        )
        .bind(username)
        .bind(judge_id)
        .fetch_all(pool)
        .await?;

        Ok(ratings)
    }

    /// Current rating: the value at the latest ranked entry. Placeholder
    /// entries with rank 0 never carry a current rating.
    pub async fn current_rating(
        pool: &PgPool,
        username: &str,
        judge_id: i32,
    ) -> AppResult<Option<i32>> {
        let rating: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT rating FROM ratings
            WHERE username = $1 AND judge_id = $2 AND contest_rank > 0
            ORDER BY contest_time DESC
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(judge_id)
        .fetch_optional(pool)
        .await?;

        Ok(rating)
    }
}
