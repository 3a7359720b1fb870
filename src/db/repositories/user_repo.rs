//! User repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{User, UserSimple},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        nickname: &str,
        is_admin: bool,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, nickname, is_enable, is_admin)
            VALUES ($1, $2, true, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(nickname)
        .bind(is_admin)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// List users, optionally restricted to enabled ones
    pub async fn list(pool: &PgPool, only_enabled: bool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE NOT $1 OR is_enable
            ORDER BY username
            "#,
        )
        .bind(only_enabled)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Update profile fields; NULL arguments keep the stored value
    pub async fn update(
        pool: &PgPool,
        username: &str,
        nickname: Option<&str>,
        phone: Option<&str>,
        qq: Option<&str>,
        t_shirt: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                nickname = COALESCE($2, nickname),
                phone = COALESCE($3, phone),
                qq = COALESCE($4, qq),
                t_shirt = COALESCE($5, t_shirt)
            WHERE username = $1
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(nickname)
        .bind(phone)
        .bind(qq)
        .bind(t_shirt)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Enable or disable a user
    pub async fn set_enable(pool: &PgPool, username: &str, is_enable: bool) -> AppResult<()> {
        let result = sqlx::query(r#"UPDATE users SET is_enable = $2 WHERE username = $1"#)
            .bind(username)
            .bind(is_enable)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(crate::error::AppError::NotFound(format!(
                "user {username}"
            )));
        }
        Ok(())
    }

    /// Grant or revoke admin
    pub async fn set_admin(pool: &PgPool, username: &str, is_admin: bool) -> AppResult<()> {
        let result = sqlx::query(r#"UPDATE users SET is_admin = $2 WHERE username = $1"#)
            .bind(username)
            .bind(is_admin)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(crate::error::AppError::NotFound(format!(
                "user {username}"
            )));
        }
        Ok(())
    }

    /// Resolve a set of usernames to (username, nickname) pairs
    pub async fn simple_by_usernames(
        pool: &PgPool,
        usernames: &[String],
    ) -> AppResult<Vec<UserSimple>> {
        let users = sqlx::query_as::<_, UserSimple>(
            r#"
            SELECT username, nickname FROM users
            WHERE username = ANY($1)
            ORDER BY username
            "#,
        )
        .bind(usernames)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
