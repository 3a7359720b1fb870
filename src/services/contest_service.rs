//! Contest service

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    db::repositories::{
        ContestRepository, JudgeRepository, SubmissionRepository, TeamRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::contests::{
        request::{CreateContestRequest, UpdateContestRequest},
        response::{ContestResponse, OverviewRow},
    },
    models::{Contest, ContestGroup},
    standings::{calc_problem_result, SubmissionInfo},
    state::AppState,
    tasks::ScrapeTask,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Create a new contest
    pub async fn create_contest(
        pool: &PgPool,
        payload: CreateContestRequest,
    ) -> AppResult<Contest> {
        let problems: Vec<(String, String)> = payload
            .problems
            .into_iter()
            .map(|p| (p.problem_id, p.display_index))
            .collect();

        ContestRepository::create(
            pool,
            payload.judge_id,
            &payload.cid,
            &payload.name,
            payload.start_time,
            payload.duration_minutes,
            &problems,
        )
        .await
    }

    /// Update contest metadata and problems
    pub async fn update_contest(
        pool: &PgPool,
        id: i32,
        payload: UpdateContestRequest,
    ) -> AppResult<Contest> {
        let problems: Vec<(String, String)> = payload
            .problems
            .into_iter()
            .map(|p| (p.problem_id, p.display_index))
            .collect();

        ContestRepository::update(
            pool,
            id,
            &payload.name,
            payload.start_time,
            payload.duration_minutes,
            &problems,
        )
        .await
    }

    /// List contest groups
    pub async fn list_groups(pool: &PgPool) -> AppResult<Vec<ContestGroup>> {
        ContestRepository::list_groups(pool).await
    }

    /// Build the response view of one contest, resolving its judge name
    /// for problem links. Manual contests have no judge and no links.
    pub async fn response_of(pool: &PgPool, contest: Contest) -> AppResult<ContestResponse> {
        let judge = JudgeRepository::find_by_id(pool, contest.judge_id).await?;
        Ok(ContestResponse::new(
            contest,
            judge.as_ref().map(|j| j.name.as_str()),
        ))
    }

    /// Contests in one group, as list summaries
    pub async fn contests_in_group(
        pool: &PgPool,
        group_id: i32,
    ) -> AppResult<Vec<ContestResponse>> {
        let contests = ContestRepository::contests_in_group(pool, group_id).await?;
        let judge_names: HashMap<i32, String> = JudgeRepository::list_all(pool)
            .await?
            .into_iter()
            .map(|j| (j.id, j.name))
            .collect();

        Ok(contests
            .into_iter()
            .map(|c| {
                let name = judge_names.get(&c.judge_id).map(String::as_str);
                ContestResponse::new(c, name)
            })
            .collect())
    }

    /// Per-user solved/upsolved totals over all contests in a group
    pub async fn group_overview(pool: &PgPool, group_id: i32) -> AppResult<Vec<OverviewRow>> {
        let contests = ContestRepository::contests_in_group(pool, group_id).await?;
        let users = UserRepository::list(pool, true).await?;

        let mut solved: HashMap<String, (i64, i64)> = HashMap::new();
        for contest in &contests {
            let problem_ids: Vec<String> = contest
                .problems
                .iter()
                .map(|p| p.problem_id.clone())
                .collect();
            let submissions =
                SubmissionRepository::for_problems(pool, contest.judge_id, &problem_ids).await?;

            let mut by_user_problem: HashMap<(&str, &str), Vec<SubmissionInfo>> = HashMap::new();
            for s in &submissions {
                by_user_problem
                    .entry((s.username.as_str(), s.problem_id.as_str()))
                    .or_default()
                    .push(SubmissionInfo {
                        is_accepted: s.is_accepted,
                        create_time: s.create_time,
                    });
            }

            let duration = contest.duration_minutes as i64;
            for user in &users {
                let entry = solved.entry(user.username.clone()).or_default();
                for problem in &contest.problems {
                    let Some(attempts) =
                        by_user_problem.get(&(user.username.as_str(), problem.problem_id.as_str()))
                    else {
                        continue;
                    };
                    let result = calc_problem_result(attempts, contest.start_time, duration);
                    if !result.is_solved() {
                        continue;
                    }
                    if result.accepted_time > duration {
                        entry.1 += 1;
                    } else {
                        entry.0 += 1;
                    }
                }
            }
        }

        let mut rows: Vec<OverviewRow> = users
            .into_iter()
            .map(|u| {
                let (in_window, upsolved) = solved
                    .get(u.username.as_str())
                    .copied()
                    .unwrap_or_default();
                OverviewRow {
                    username: u.username,
                    nickname: u.nickname,
                    solved: in_window,
                    upsolved,
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            (b.solved + b.upsolved)
                .cmp(&(a.solved + a.upsolved))
                .then_with(|| a.username.cmp(&b.username))
        });
        Ok(rows)
    }

    /// Register teams for a contest; individual users are materialized
    /// as their self teams
    pub async fn set_teams(
        pool: &PgPool,
        contest_id: i32,
        team_ids: &[i32],
        usernames: &[String],
    ) -> AppResult<()> {
        ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contest {contest_id}")))?;

        let mut all_ids = team_ids.to_vec();
        for username in usernames {
            let team = TeamRepository::self_team_for(pool, username).await?;
            all_ids.push(team.id);
        }
        all_ids.sort_unstable();
        all_ids.dedup();

        ContestRepository::set_teams(pool, contest_id, &all_ids).await
    }

    /// Publish a scrape task to re-fetch one contest's metadata
    pub async fn refresh_contest(state: &AppState, contest_id: i32) -> AppResult<()> {
        let contest = ContestRepository::find_by_id(state.db(), contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contest {contest_id}")))?;

        if contest.is_manual() {
            return Err(AppError::InvalidInput(format!(
                "contest {contest_id} was entered manually and has no judge to scrape"
            )));
        }

        JudgeRepository::list_enabled(state.db())
            .await?
            .iter()
            .find(|j| j.id == contest.judge_id)
            .ok_or_else(|| {
                AppError::InvalidInput(format!("judge {} is not enabled", contest.judge_id))
            })?;

        state
            .task_queue()
            .publish(contest.judge_id, &ScrapeTask::Contest { cid: contest.cid })
            .await?;
        Ok(())
    }
}
