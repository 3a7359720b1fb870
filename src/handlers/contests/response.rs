//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Contest, Problem};
use crate::standings::Standing;

/// Problem as presented in contest responses, with a link to the judge's
/// problem page when one can be derived
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub problem_id: String,
    pub display_index: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_url: Option<String>,
}

impl ProblemResponse {
    fn new(problem: Problem, judge_name: Option<&str>) -> Self {
        let problem_url = judge_name.and_then(|judge| problem_url(judge, &problem.problem_id));
        Self {
            problem_id: problem.problem_id,
            display_index: problem.display_index,
            problem_url,
        }
    }
}

/// Judge-side URL for a problem, keyed on the judge's name. Judges with
/// no known URL scheme (and manual contests, which have no judge) get
/// `None`.
fn problem_url(judge: &str, problem_id: &str) -> Option<String> {
    match judge.to_lowercase().as_str() {
        "codeforces" => codeforces_problem_url(problem_id),
        "poj" => Some(format!("http://poj.org/problem?id={problem_id}")),
        "nowcoder" => Some(format!("https://ac.nowcoder.com/acm/problem/{problem_id}")),
        _ => None,
    }
}

/// Codeforces problem ids concatenate the contest id and the index
/// ("1670A1"); six-digit contest ids live under /gym, shorter ones under
/// /contest. The "acmsguru" prefix marks the archive problemset.
fn codeforces_problem_url(problem_id: &str) -> Option<String> {
    if let Some(pid) = problem_id.strip_prefix("acmsguru") {
        return Some(format!(
            "https://codeforces.com/problemsets/acmsguru/problem/99999/{pid}"
        ));
    }
    let split = problem_id.find(|c: char| !c.is_ascii_digit())?;
    let (cid, index) = problem_id.split_at(split);
    if cid.is_empty() {
        return None;
    }
    if cid.len() >= 6 {
        Some(format!("https://codeforces.com/gym/{cid}/problem/{index}"))
    } else {
        Some(format!("https://codeforces.com/contest/{cid}/problem/{index}"))
    }
}

/// Contest summary for list views
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: i32,
    pub judge_id: i32,
    pub cid: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_solved: i32,
    pub participants: i32,
    pub problems: Vec<ProblemResponse>,
}

impl ContestResponse {
    pub fn new(contest: Contest, judge_name: Option<&str>) -> Self {
        let end_time = contest.end_time();
        Self {
            id: contest.id,
            judge_id: contest.judge_id,
            cid: contest.cid,
            name: contest.name,
            start_time: contest.start_time,
            end_time,
            duration_minutes: contest.duration_minutes,
            max_solved: contest.max_solved,
            participants: contest.participants,
            problems: contest
                .problems
                .into_iter()
                .map(|p| ProblemResponse::new(p, judge_name))
                .collect(),
        }
    }
}

/// Contest detail: metadata plus full standings
#[derive(Debug, Serialize)]
pub struct ContestDetailResponse {
    #[serde(flatten)]
    pub contest: ContestResponse,
    pub standings: Vec<Standing>,
}

/// One user's totals on a group overview
#[derive(Debug, Serialize)]
pub struct OverviewRow {
    pub username: String,
    pub nickname: String,
    pub solved: i64,
    pub upsolved: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeforces_contest_and_gym_urls_split_on_id_length() {
        assert_eq!(
            problem_url("codeforces", "1670A1").as_deref(),
            Some("https://codeforces.com/contest/1670/problem/A1")
        );
        assert_eq!(
            problem_url("codeforces", "104077B").as_deref(),
            Some("https://codeforces.com/gym/104077/problem/B")
        );
    }

    #[test]
    fn codeforces_acmsguru_uses_the_archive_problemset() {
        assert_eq!(
            problem_url("codeforces", "acmsguru112").as_deref(),
            Some("https://codeforces.com/problemsets/acmsguru/problem/99999/112")
        );
    }

    #[test]
    fn undecodable_codeforces_id_yields_no_url() {
        assert_eq!(problem_url("codeforces", "1670"), None);
        assert_eq!(problem_url("codeforces", "A1670"), None);
    }

    #[test]
    fn other_judges_and_unknown_judges() {
        assert_eq!(
            problem_url("poj", "1001").as_deref(),
            Some("http://poj.org/problem?id=1001")
        );
        assert_eq!(
            problem_url("nowcoder", "51249").as_deref(),
            Some("https://ac.nowcoder.com/acm/problem/51249")
        );
        assert_eq!(problem_url("atcoder", "abc300_a"), None);
    }
}
