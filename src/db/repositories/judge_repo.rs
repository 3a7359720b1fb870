//! Judge and judge-account repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Judge, JudgeAccount},
};

/// Repository for judges and account bindings
pub struct JudgeRepository;

impl JudgeRepository {
    /// List enabled judges
    pub async fn list_enabled(pool: &PgPool) -> AppResult<Vec<Judge>> {
        let judges =
            sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges WHERE is_enable ORDER BY id"#)
                .fetch_all(pool)
                .await?;

        Ok(judges)
    }

    /// List all judges including disabled ones
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Judge>> {
        let judges = sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(judges)
    }

    /// Find a judge by id. Returns `None` for the manual sentinel id 0,
    /// which has no judges row.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(judge)
    }

    /// Find a judge by its (lowercase) name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(r#"SELECT * FROM judges WHERE LOWER(name) = LOWER($1)"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(judge)
    }

    /// All account bindings on one judge
    pub async fn list_accounts(pool: &PgPool, judge_id: i32) -> AppResult<Vec<JudgeAccount>> {
        let accounts = sqlx::query_as::<_, JudgeAccount>(
            r#"SELECT * FROM judge_accounts WHERE judge_id = $1 ORDER BY username"#,
        )
        .bind(judge_id)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    /// One user's account bindings across judges
    pub async fn accounts_for_user(pool: &PgPool, username: &str) -> AppResult<Vec<JudgeAccount>> {
        let accounts = sqlx::query_as::<_, JudgeAccount>(
            r#"SELECT * FROM judge_accounts WHERE username = $1 ORDER BY judge_id"#,
        )
        .bind(username)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    /// Resolve an account handle on a judge to the owning username
    pub async fn resolve_handle(
        pool: &PgPool,
        judge_id: i32,
        handle: &str,
    ) -> AppResult<Option<String>> {
        let username: Option<String> = sqlx::query_scalar(
            r#"SELECT username FROM judge_accounts WHERE judge_id = $1 AND handle = $2"#,
        )
        .bind(judge_id)
        .bind(handle)
        .fetch_optional(pool)
        .await?;

        Ok(username)
    }

    /// Bind (or re-bind) a user's handle on a judge. A re-bind drops the
    /// submissions scraped under the old handle, they no longer belong to
    /// this user.
    pub async fn bind_account(
        pool: &PgPool,
        username: &str,
        judge_id: i32,
        handle: &str,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        let old: Option<String> = sqlx::query_scalar(
            r#"SELECT handle FROM judge_accounts WHERE username = $1 AND judge_id = $2"#,
        )
        .bind(username)
        .bind(judge_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(old_handle) = &old {
            if old_handle != handle {
                sqlx::query(
                    r#"DELETE FROM submissions WHERE username = $1 AND account_judge_id = $2"#,
                )
                .bind(username)
                .bind(judge_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        sqlx::query(
            r#"
            INSERT INTO judge_accounts (username, judge_id, handle)
            VALUES ($1, $2, $3)
            ON CONFLICT (username, judge_id) DO UPDATE SET handle = EXCLUDED.handle
            "#,
        )
        .bind(username)
        .bind(judge_id)
        .bind(handle)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
