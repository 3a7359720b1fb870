//! Team repository

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use crate::{
    error::AppResult,
    models::{Team, TeamGroup, UserSimple},
};

/// A team joined with one member row; folded into `Team` with members
#[derive(Debug, FromRow)]
struct TeamMemberRow {
    id: i32,
    name: String,
    is_enable: bool,
    is_self: bool,
    username: String,
    nickname: String,
}

fn fold_member_rows(rows: Vec<TeamMemberRow>) -> Vec<Team> {
    let mut order: Vec<i32> = Vec::new();
    let mut by_id: HashMap<i32, Team> = HashMap::new();
    for row in rows {
        let team = by_id.entry(row.id).or_insert_with(|| {
            order.push(row.id);
            Team {
                id: row.id,
                name: row.name.clone(),
                is_enable: row.is_enable,
                is_self: row.is_self,
                members: Vec::new(),
            }
        });
        team.members.push(UserSimple {
            username: row.username,
            nickname: row.nickname,
        });
    }
    order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .collect()
}

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a team with its member roster in one transaction
    pub async fn create(pool: &PgPool, name: &str, members: &[String]) -> AppResult<Team> {
        let mut tx = pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO teams (name, is_enable, is_self)
            VALUES ($1, true, false)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        for username in members {
            sqlx::query(r#"INSERT INTO team_members (team_id, username) VALUES ($1, $2)"#)
                .bind(id)
                .bind(username)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound(format!("team {id}")))
    }

    /// Find one team with its roster
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Team>> {
        let rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT t.id, t.name, t.is_enable, t.is_self, u.username, u.nickname
            FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            JOIN users u ON u.username = tm.username
            WHERE t.id = $1
            ORDER BY u.username
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(fold_member_rows(rows).into_iter().next())
    }

    /// List teams with rosters, optionally restricted to enabled ones
    pub async fn list(pool: &PgPool, only_enabled: bool) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT t.id, t.name, t.is_enable, t.is_self, u.username, u.nickname
            FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            JOIN users u ON u.username = tm.username
            WHERE NOT $1 OR t.is_enable
            ORDER BY t.id, u.username
            "#,
        )
        .bind(only_enabled)
        .fetch_all(pool)
        .await?;

        Ok(fold_member_rows(rows))
    }

    /// Teams registered in one contest, with rosters
    pub async fn teams_in_contest(pool: &PgPool, contest_id: i32) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT t.id, t.name, t.is_enable, t.is_self, u.username, u.nickname
            FROM contest_teams ct
            JOIN teams t ON t.id = ct.team_id
            JOIN team_members tm ON tm.team_id = t.id
            JOIN users u ON u.username = tm.username
            WHERE ct.contest_id = $1 AND t.is_enable
            ORDER BY t.id, u.username
            "#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(fold_member_rows(rows))
    }

    /// A user's single-member self team, creating it on first use
    pub async fn self_team_for(pool: &PgPool, username: &str) -> AppResult<Team> {
        let existing: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT t.id FROM teams t
            JOIN team_members tm ON tm.team_id = t.id
            WHERE t.is_self AND tm.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        let id = match existing {
            Some(id) => id,
            None => {
                let mut tx = pool.begin().await?;
                let id: i32 = sqlx::query_scalar(
                    r#"
                    INSERT INTO teams (name, is_enable, is_self)
                    VALUES ($1, true, true)
                    RETURNING id
                    "#,
                )
                .bind(username)
                .fetch_one(&mut *tx)
                .await?;
                sqlx::query(r#"INSERT INTO team_members (team_id, username) VALUES ($1, $2)"#)
                    .bind(id)
                    .bind(username)
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                id
            }
        };

        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| crate::error::AppError::NotFound(format!("self team for {username}")))
    }

    /// Enable or disable a team
    pub async fn set_enable(pool: &PgPool, id: i32, is_enable: bool) -> AppResult<()> {
        let result = sqlx::query(r#"UPDATE teams SET is_enable = $2 WHERE id = $1"#)
            .bind(id)
            .bind(is_enable)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(crate::error::AppError::NotFound(format!("team {id}")));
        }
        Ok(())
    }

    /// List team groups (grade cohorts and ad-hoc groupings)
    pub async fn list_groups(pool: &PgPool) -> AppResult<Vec<TeamGroup>> {
        let groups =
            sqlx::query_as::<_, TeamGroup>(r#"SELECT * FROM team_groups ORDER BY id DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(groups)
    }

    /// Usernames belonging to one team group
    pub async fn usernames_in_group(pool: &PgPool, group_id: i32) -> AppResult<Vec<String>> {
        let usernames: Vec<String> = sqlx::query_scalar(
            r#"SELECT username FROM team_group_members WHERE group_id = $1 ORDER BY username"#,
        )
        .bind(group_id)
        .fetch_all(pool)
        .await?;

        Ok(usernames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, name: &str, username: &str) -> TeamMemberRow {
        TeamMemberRow {
            id,
            name: name.into(),
            is_enable: true,
            is_self: false,
            username: username.into(),
            nickname: format!("{username}-nick"),
        }
    }

    #[test]
    fn fold_groups_member_rows_by_team() {
        let rows = vec![row(1, "A", "u1"), row(1, "A", "u2"), row(2, "B", "u3")];
        let teams = fold_member_rows(rows);
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, 1);
        assert_eq!(teams[0].members.len(), 2);
        assert_eq!(teams[1].id, 2);
        assert_eq!(teams[1].members[0].username, "u3");
    }

    #[test]
    fn fold_preserves_first_seen_order() {
        let rows = vec![row(5, "E", "u1"), row(2, "B", "u2"), row(5, "E", "u3")];
        let ids: Vec<i32> = fold_member_rows(rows).iter().map(|t| t.id).collect();
        assert_eq!(ids, [5, 2]);
    }
}
