//! Standings assembly: group submissions, fold member rows into team rows,
//! rank teams

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Contest, Submission, Team};

use super::problem_result::{calc_problem_result, ProblemResult, SubmissionInfo};

/// Errors that abort a standings computation. Both are data problems the
/// caller must surface; neither produces partial output.
#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error("contest cannot be resolved")]
    InvalidContest,

    #[error("inconsistent data: {0}")]
    DataInconsistency(String),
}

/// Tie-break applied after sorting by solved count descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Leave tied teams in input order (stable sort only)
    InsertionOrder,
    /// Break ties by display name ascending
    #[default]
    NameAscending,
}

/// One line of a standings table, for a team or a single member.
#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub id: String,
    pub name: String,
    pub solved: i64,
    pub problem_results: Vec<ProblemResult>,
}

/// A ranked standings entry: the team row plus per-member breakdown.
/// Self teams carry no member breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub team: StandingRow,
    pub users: Vec<StandingRow>,
}

fn solved_count(results: &[ProblemResult]) -> i64 {
    results.iter().filter(|r| r.is_solved()).count() as i64
}

/// Compute ranked standings for one contest from an immutable snapshot of
/// teams and raw submissions.
///
/// Submissions are matched to the contest's problems purely by
/// `(judge_id, problem_id)`, so a superset fetched over a wider time range
/// still attributes upsolves correctly. A team's result on each problem is
/// the best of its members' results under [`ProblemResult::better_of`];
/// a team's `solved` counts every problem with an accept, in-window or not.
pub fn build_standings(
    contest: &Contest,
    teams: &[Team],
    submissions: &[Submission],
    tie_break: TieBreak,
) -> Result<Vec<Standing>, StandingsError> {
    if contest.id <= 0 {
        return Err(StandingsError::InvalidContest);
    }
    let duration = contest.duration_minutes as i64;

    let mut by_key: HashMap<(&str, i32, &str), Vec<SubmissionInfo>> = HashMap::new();
    for s in submissions {
        by_key
            .entry((s.username.as_str(), s.judge_id, s.problem_id.as_str()))
            .or_default()
            .push(SubmissionInfo {
                is_accepted: s.is_accepted,
                create_time: s.create_time,
            });
    }
    let no_attempts: Vec<SubmissionInfo> = Vec::new();

    let mut standings = Vec::with_capacity(teams.len());
    for team in teams {
        if team.members.is_empty() {
            return Err(StandingsError::DataInconsistency(format!(
                "team {} has no members",
                team.id
            )));
        }

        let mut team_row = StandingRow {
            id: team.id.to_string(),
            name: team.name.clone(),
            solved: 0,
            problem_results: contest
                .problems
                .iter()
                .map(|_| ProblemResult::empty())
                .collect(),
        };

        let mut users = Vec::with_capacity(team.members.len());
        for member in &team.members {
            let results: Vec<ProblemResult> = contest
                .problems
                .iter()
                .map(|p| {
                    let attempts = by_key
                        .get(&(member.username.as_str(), p.judge_id, p.problem_id.as_str()))
                        .unwrap_or(&no_attempts);
                    calc_problem_result(attempts, contest.start_time, duration)
                })
                .collect();

            for (slot, result) in team_row.problem_results.iter_mut().zip(&results) {
                *slot = ProblemResult::better_of(slot.clone(), result.clone());
            }

            users.push(StandingRow {
                id: member.username.clone(),
                name: member.nickname.clone(),
                solved: solved_count(&results),
                problem_results: results,
            });
        }
        team_row.solved = solved_count(&team_row.problem_results);

        let standing = if team.is_self {
            // A self team is displayed as its sole member, with no
            // team-vs-members breakdown.
            let member = &team.members[0];
            team_row.id = member.username.clone();
            team_row.name = member.nickname.clone();
            Standing {
                team: team_row,
                users: Vec::new(),
            }
        } else {
            // Roster teams expose attempt detail only at member level.
            for r in &mut team_row.problem_results {
                r.submissions.clear();
            }
            Standing {
                team: team_row,
                users,
            }
        };
        standings.push(standing);
    }

    match tie_break {
        TieBreak::InsertionOrder => {
            standings.sort_by(|a, b| b.team.solved.cmp(&a.team.solved));
        }
        TieBreak::NameAscending => {
            standings.sort_by(|a, b| {
                b.team
                    .solved
                    .cmp(&a.team.solved)
                    .then_with(|| a.team.name.cmp(&b.team.name))
            });
        }
    }
    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Problem, UserSimple};
    use crate::standings::problem_result::UNSOLVED;
    use chrono::{DateTime, TimeZone, Utc};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn contest(problem_ids: &[&str]) -> Contest {
        Contest {
            id: 7,
            judge_id: 1,
            cid: "1700".into(),
            name: "Weekly Round".into(),
            start_time: start(),
            duration_minutes: 120,
            max_solved: 0,
            participants: 0,
            problems: problem_ids
                .iter()
                .map(|pid| Problem {
                    contest_id: 7,
                    judge_id: 1,
                    problem_id: pid.to_string(),
                    display_index: pid.to_uppercase(),
                })
                .collect(),
        }
    }

    fn member(username: &str) -> UserSimple {
        UserSimple {
            username: username.into(),
            nickname: format!("{username}-nick"),
        }
    }

    fn team(id: i32, name: &str, is_self: bool, usernames: &[&str]) -> Team {
        Team {
            id,
            name: name.into(),
            is_enable: true,
            is_self,
            members: usernames.iter().map(|u| member(u)).collect(),
        }
    }

    fn submission(username: &str, problem_id: &str, is_accepted: bool, offset_min: i64) -> Submission {
        Submission {
            id: 0,
            username: username.into(),
            judge_id: 1,
            account_judge_id: 1,
            sid: format!("{username}-{problem_id}-{offset_min}"),
            problem_id: problem_id.into(),
            is_accepted,
            create_time: start() + chrono::Duration::minutes(offset_min),
        }
    }

    #[test]
    fn two_member_team_merges_best_results() {
        // A: problem "a" rejected at +10, accepted at +15; problem "b"
        // accepted at +200 (after the 120-minute window). B: no attempts.
        let contest = contest(&["a", "b"]);
        let teams = vec![team(1, "Rustaceans", false, &["alice", "bob"])];
        let subs = vec![
            submission("alice", "a", false, 10),
            submission("alice", "a", true, 15),
            submission("alice", "b", true, 200),
        ];

        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        assert_eq!(standings.len(), 1);
        let s = &standings[0];

        let alice = s.users.iter().find(|u| u.id == "alice").unwrap();
        assert_eq!(alice.problem_results[0].accepted_time, 15);
        assert_eq!(alice.problem_results[0].dirt, 1);
        assert_eq!(alice.problem_results[1].accepted_time, 121);
        assert_eq!(alice.problem_results[1].dirt, 0);
        // Upsolves count toward solved.
        assert_eq!(alice.solved, 2);

        let bob = s.users.iter().find(|u| u.id == "bob").unwrap();
        assert_eq!(bob.problem_results[0].accepted_time, UNSOLVED);
        assert_eq!(bob.problem_results[0].dirt, 0);
        assert_eq!(bob.solved, 0);

        // Team takes Alice's results on both problems.
        assert_eq!(s.team.problem_results[0].accepted_time, 15);
        assert_eq!(s.team.problem_results[1].accepted_time, 121);
        assert_eq!(s.team.solved, 2);
    }

    #[test]
    fn team_result_dominates_every_member() {
        let contest = contest(&["a"]);
        let teams = vec![team(1, "Duo", false, &["alice", "bob"])];
        let subs = vec![
            submission("alice", "a", false, 5),
            submission("alice", "a", true, 30),
            submission("bob", "a", true, 10),
        ];
        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        let s = &standings[0];
        let team_result = &s.team.problem_results[0];
        for u in &s.users {
            let member_result = &u.problem_results[0];
            // Not worse: the team result must win (or tie) a direct merge.
            let merged = ProblemResult::better_of(team_result.clone(), member_result.clone());
            assert_eq!(merged.accepted_time, team_result.accepted_time);
            assert_eq!(merged.dirt, team_result.dirt);
        }
        // Bob's clean accept at +10 beats Alice's dirtier one.
        assert_eq!(team_result.accepted_time, 10);
        assert_eq!(team_result.dirt, 0);
    }

    #[test]
    fn solved_count_matches_problem_results() {
        let contest = contest(&["a", "b", "c"]);
        let teams = vec![team(1, "Solo", false, &["alice"])];
        let subs = vec![
            submission("alice", "a", true, 5),
            submission("alice", "b", false, 10),
        ];
        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        for s in &standings {
            let expected = s.team.problem_results.iter().filter(|r| r.is_solved()).count() as i64;
            assert_eq!(s.team.solved, expected);
            for u in &s.users {
                let expected = u.problem_results.iter().filter(|r| r.is_solved()).count() as i64;
                assert_eq!(u.solved, expected);
            }
        }
    }

    #[test]
    fn self_team_takes_member_identity_and_hides_breakdown() {
        let contest = contest(&["a"]);
        let teams = vec![team(42, "alice self", true, &["alice"])];
        let subs = vec![submission("alice", "a", true, 20)];
        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        let s = &standings[0];
        assert_eq!(s.team.id, "alice");
        assert_eq!(s.team.name, "alice-nick");
        assert!(s.users.is_empty());
        // Self teams keep the attempt detail on the (single-member) row.
        assert_eq!(s.team.problem_results[0].submissions.len(), 1);
    }

    #[test]
    fn roster_team_strips_attempt_detail_at_team_level() {
        let contest = contest(&["a"]);
        let teams = vec![team(1, "Duo", false, &["alice", "bob"])];
        let subs = vec![submission("alice", "a", true, 20)];
        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        let s = &standings[0];
        assert!(s.team.problem_results[0].submissions.is_empty());
        let alice = s.users.iter().find(|u| u.id == "alice").unwrap();
        assert_eq!(alice.problem_results[0].submissions.len(), 1);
    }

    #[test]
    fn ranking_by_solved_with_name_tie_break() {
        let contest = contest(&["a", "b", "c"]);
        let teams = vec![
            team(1, "Yaks", false, &["u1"]),
            team(2, "Xylos", false, &["u2"]),
            team(3, "Zebras", false, &["u3"]),
        ];
        let mut subs = Vec::new();
        for p in ["a", "b", "c"] {
            subs.push(submission("u1", p, true, 30));
            subs.push(submission("u2", p, true, 40));
        }
        subs.push(submission("u3", "a", true, 10));
        subs.push(submission("u3", "b", true, 20));

        let standings = build_standings(&contest, &teams, &subs, TieBreak::NameAscending).unwrap();
        let names: Vec<_> = standings.iter().map(|s| s.team.name.as_str()).collect();
        assert_eq!(names, ["Xylos", "Yaks", "Zebras"]);

        let standings = build_standings(&contest, &teams, &subs, TieBreak::InsertionOrder).unwrap();
        let names: Vec<_> = standings.iter().map(|s| s.team.name.as_str()).collect();
        assert_eq!(names, ["Yaks", "Xylos", "Zebras"]);
    }

    #[test]
    fn contest_without_problems_yields_empty_rows() {
        let contest = contest(&[]);
        let teams = vec![team(1, "Duo", false, &["alice"])];
        let standings = build_standings(&contest, &teams, &[], TieBreak::NameAscending).unwrap();
        assert_eq!(standings.len(), 1);
        assert!(standings[0].team.problem_results.is_empty());
        assert_eq!(standings[0].team.solved, 0);
    }

    #[test]
    fn no_teams_yields_empty_standings() {
        let contest = contest(&["a"]);
        let standings = build_standings(&contest, &[], &[], TieBreak::NameAscending).unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn memberless_team_is_a_data_error() {
        let contest = contest(&["a"]);
        let teams = vec![team(1, "Ghosts", false, &[])];
        let err = build_standings(&contest, &teams, &[], TieBreak::NameAscending).unwrap_err();
        assert!(matches!(err, StandingsError::DataInconsistency(_)));
    }

    #[test]
    fn unresolved_contest_is_rejected() {
        let mut c = contest(&["a"]);
        c.id = 0;
        let err = build_standings(&c, &[], &[], TieBreak::NameAscending).unwrap_err();
        assert!(matches!(err, StandingsError::InvalidContest));
    }

    #[test]
    fn submissions_match_problems_across_judge_namespace() {
        // The grouping key ignores which contest a submission was scraped
        // for; only (username, judge_id, problem_id) matters.
        let contest = contest(&["a"]);
        let teams = vec![team(1, "Solo", false, &["alice"])];
        let mut sub = submission("alice", "a", true, 500);
        sub.account_judge_id = 9;
        let standings = build_standings(&contest, &teams, &[sub], TieBreak::NameAscending).unwrap();
        assert_eq!(standings[0].team.problem_results[0].accepted_time, 121);

        let mut other_judge = submission("alice", "a", true, 10);
        other_judge.judge_id = 2;
        let standings =
            build_standings(&contest, &teams, &[other_judge], TieBreak::NameAscending).unwrap();
        assert_eq!(standings[0].team.problem_results[0].accepted_time, UNSOLVED);
    }
}
