//! Contest repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Contest, ContestGroup, Problem},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a contest with its problem list
    pub async fn create(
        pool: &PgPool,
        judge_id: i32,
        cid: &str,
        name: &str,
        start_time: DateTime<Utc>,
        duration_minutes: i32,
        problems: &[(String, String)],
    ) -> AppResult<Contest> {
        let mut tx = pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO contests (judge_id, cid, name, start_time, duration_minutes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(judge_id)
        .bind(cid)
        .bind(name)
        .bind(start_time)
        .bind(duration_minutes)
        .fetch_one(&mut *tx)
        .await?;

        for (problem_id, display_index) in problems {
            sqlx::query(
                r#"
                INSERT INTO contest_problems (contest_id, judge_id, problem_id, display_index)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(judge_id)
            .bind(problem_id)
            .bind(display_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound(format!("contest {id}")))
    }

    /// Update contest metadata and replace its problem list
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: &str,
        start_time: DateTime<Utc>,
        duration_minutes: i32,
        problems: &[(String, String)],
    ) -> AppResult<Contest> {
        let mut tx = pool.begin().await?;

        let judge_id: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE contests
            SET name = $2, start_time = $3, duration_minutes = $4
            WHERE id = $1
            RETURNING judge_id
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(start_time)
        .bind(duration_minutes)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(judge_id) = judge_id else {
            return Err(crate::error::AppError::NotFound(format!("contest {id}")));
        };

        sqlx::query(r#"DELETE FROM contest_problems WHERE contest_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for (problem_id, display_index) in problems {
            sqlx::query(
                r#"
                INSERT INTO contest_problems (contest_id, judge_id, problem_id, display_index)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id)
            .bind(judge_id)
            .bind(problem_id)
            .bind(display_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound(format!("contest {id}")))
    }

    /// Find one contest with its problems, sorted by display index
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(mut contest) = contest else {
            return Ok(None);
        };
        contest.problems = Self::problems_of(pool, id).await?;

        Ok(Some(contest))
    }

    /// Problems of one contest, sorted by display index
    pub async fn problems_of(pool: &PgPool, contest_id: i32) -> AppResult<Vec<Problem>> {
        let mut problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM contest_problems WHERE contest_id = $1"#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;
        problems.sort_by(Problem::index_cmp);

        Ok(problems)
    }

    /// Contests in one group, with problems, newest first
    pub async fn contests_in_group(pool: &PgPool, group_id: i32) -> AppResult<Vec<Contest>> {
        let mut contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT c.* FROM contests c
            JOIN contest_group_members cgm ON cgm.contest_id = c.id
            WHERE cgm.group_id = $1
            ORDER BY c.start_time DESC
            "#,
        )
        .bind(group_id)
        .fetch_all(pool)
        .await?;

        for contest in &mut contests {
            contest.problems = Self::problems_of(pool, contest.id).await?;
        }

        Ok(contests)
    }

    /// Contests a user's teams took part in, newest first
    pub async fn contests_for_user(pool: &PgPool, username: &str) -> AppResult<Vec<Contest>> {
        let mut contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT DISTINCT c.* FROM contests c
            JOIN contest_teams ct ON ct.contest_id = c.id
            JOIN team_members tm ON tm.team_id = ct.team_id
            WHERE tm.username = $1
            ORDER BY c.start_time DESC
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await?;

        for contest in &mut contests {
            contest.problems = Self::problems_of(pool, contest.id).await?;
        }

        Ok(contests)
    }

    /// List contest groups
    pub async fn list_groups(pool: &PgPool) -> AppResult<Vec<ContestGroup>> {
        let groups =
            sqlx::query_as::<_, ContestGroup>(r#"SELECT * FROM contest_groups ORDER BY id"#)
                .fetch_all(pool)
                .await?;

        Ok(groups)
    }

    /// Register teams for a contest, replacing the previous registration
    pub async fn set_teams(pool: &PgPool, contest_id: i32, team_ids: &[i32]) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM contest_teams WHERE contest_id = $1"#)
            .bind(contest_id)
            .execute(&mut *tx)
            .await?;

        for team_id in team_ids {
            sqlx::query(r#"INSERT INTO contest_teams (contest_id, team_id) VALUES ($1, $2)"#)
                .bind(contest_id)
                .bind(team_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Store the denormalized standings summary shown in contest lists
    pub async fn update_stats(
        pool: &PgPool,
        contest_id: i32,
        max_solved: i32,
        participants: i32,
    ) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE contests SET max_solved = $2, participants = $3 WHERE id = $1"#,
        )
        .bind(contest_id)
        .bind(max_solved)
        .bind(participants)
        .execute(pool)
        .await?;

        Ok(())
    }
}
