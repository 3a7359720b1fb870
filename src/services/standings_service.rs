//! Standings service
//!
//! Assembles the immutable snapshot (contest, registered teams, raw
//! submissions) and hands it to the pure standings core. All I/O happens
//! here; the core never touches the database.

use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, SubmissionRepository, TeamRepository},
    error::{AppError, AppResult},
    models::Contest,
    standings::{build_standings, Standing, StandingRow, TieBreak},
};

/// Standings service for snapshot assembly
pub struct StandingsService;

impl StandingsService {
    /// Compute full standings for one contest and refresh its denormalized
    /// summary stats
    pub async fn standings_of(
        pool: &PgPool,
        contest_id: i32,
    ) -> AppResult<(Contest, Vec<Standing>)> {
        let contest = ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contest {contest_id}")))?;

        let teams = TeamRepository::teams_in_contest(pool, contest_id).await?;
        let problem_ids: Vec<String> = contest
            .problems
            .iter()
            .map(|p| p.problem_id.clone())
            .collect();
        let submissions =
            SubmissionRepository::for_problems(pool, contest.judge_id, &problem_ids).await?;

        let standings = build_standings(&contest, &teams, &submissions, TieBreak::default())?;

        let max_solved = standings.iter().map(|s| s.team.solved).max().unwrap_or(0) as i32;
        let participants = standings.len() as i32;
        ContestRepository::update_stats(pool, contest_id, max_solved, participants).await?;

        Ok((contest, standings))
    }

    /// One user's row in each contest they took part in, newest first
    pub async fn rows_for_user(
        pool: &PgPool,
        username: &str,
    ) -> AppResult<Vec<(Contest, StandingRow)>> {
        let contests = ContestRepository::contests_for_user(pool, username).await?;

        let mut rows = Vec::with_capacity(contests.len());
        for contest in contests {
            let teams = TeamRepository::teams_in_contest(pool, contest.id).await?;
            let problem_ids: Vec<String> = contest
                .problems
                .iter()
                .map(|p| p.problem_id.clone())
                .collect();
            let submissions =
                SubmissionRepository::for_problems(pool, contest.judge_id, &problem_ids).await?;

            let standings = build_standings(&contest, &teams, &submissions, TieBreak::default())?;
            if let Some(row) = Self::row_of(&standings, username) {
                rows.push((contest, row));
            }
        }
        Ok(rows)
    }

    /// Find the row belonging to one user: their member row inside a
    /// roster team, or the team row itself when they competed solo
    fn row_of(standings: &[Standing], username: &str) -> Option<StandingRow> {
        for standing in standings {
            if standing.users.is_empty() && standing.team.id == username {
                return Some(standing.team.clone());
            }
            if let Some(row) = standing.users.iter().find(|u| u.id == username) {
                return Some(row.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::problem_result::ProblemResult;

    fn row(id: &str, solved: i64) -> StandingRow {
        StandingRow {
            id: id.into(),
            name: format!("{id}-nick"),
            solved,
            problem_results: vec![ProblemResult::empty()],
        }
    }

    #[test]
    fn row_of_finds_member_inside_roster_team() {
        let standings = vec![Standing {
            team: row("1", 3),
            users: vec![row("alice", 2), row("bob", 1)],
        }];
        let found = StandingsService::row_of(&standings, "bob").unwrap();
        assert_eq!(found.solved, 1);
    }

    #[test]
    fn row_of_matches_self_team_by_id() {
        let standings = vec![Standing {
            team: row("alice", 2),
            users: Vec::new(),
        }];
        assert!(StandingsService::row_of(&standings, "alice").is_some());
        assert!(StandingsService::row_of(&standings, "carol").is_none());
    }
}
