//! Regional contest and award repository

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Regional, RegionalAward},
};

/// Repository for onsite regionals
pub struct RegionalRepository;

impl RegionalRepository {
    /// List regionals, newest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Regional>> {
        let regionals =
            sqlx::query_as::<_, Regional>(r#"SELECT * FROM regionals ORDER BY date DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(regionals)
    }

    /// Find one regional
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Regional>> {
        let regional = sqlx::query_as::<_, Regional>(r#"SELECT * FROM regionals WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(regional)
    }

    /// Create a regional
    pub async fn create(pool: &PgPool, name: &str, date: NaiveDate) -> AppResult<Regional> {
        let regional = sqlx::query_as::<_, Regional>(
            r#"
            INSERT INTO regionals (name, date)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(regional)
    }

    /// Record team awards for a regional
    pub async fn add_awards(
        pool: &PgPool,
        regional_id: i32,
        awards: &[RegionalAward],
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        for a in awards {
            sqlx::query(
                r#"
                INSERT INTO regional_awards (regional_id, team_id, medal, award)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (regional_id, team_id)
                DO UPDATE SET medal = EXCLUDED.medal, award = EXCLUDED.award
                "#,
            )
            .bind(regional_id)
            .bind(a.team_id)
            .bind(a.medal)
            .bind(&a.award)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Awards given at one regional
    pub async fn awards_for(pool: &PgPool, regional_id: i32) -> AppResult<Vec<RegionalAward>> {
        let awards = sqlx::query_as::<_, RegionalAward>(
            r#"SELECT * FROM regional_awards WHERE regional_id = $1 ORDER BY medal, team_id"#,
        )
        .bind(regional_id)
        .fetch_all(pool)
        .await?;

        Ok(awards)
    }

    /// Awards earned by one user through team membership, newest first
    pub async fn awards_for_user(pool: &PgPool, username: &str) -> AppResult<Vec<RegionalAward>> {
        let awards = sqlx::query_as::<_, RegionalAward>(
            r#"
            SELECT ra.* FROM regional_awards ra
            JOIN regionals r ON r.id = ra.regional_id
            JOIN team_members tm ON tm.team_id = ra.team_id
            WHERE tm.username = $1
            ORDER BY r.date DESC
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await?;

        Ok(awards)
    }
}
