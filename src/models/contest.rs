//! Contest and problem models

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest database model
///
/// `judge_id = 0` marks a manually entered contest with no judge-side
/// counterpart; such contests cannot be refreshed by scrapers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: i32,
    pub judge_id: i32,
    /// Contest id on the external judge (empty for manual contests)
    pub cid: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_solved: i32,
    pub participants: i32,
    #[sqlx(skip)]
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Contest {
    /// End of the official window, inclusive.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(self.duration_minutes as i64)
    }

    /// Whether this contest was entered by hand rather than scraped.
    pub fn is_manual(&self) -> bool {
        self.judge_id == 0
    }
}

/// Problem within a contest, identified on its judge by (judge_id, problem_id)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub contest_id: i32,
    pub judge_id: i32,
    pub problem_id: String,
    /// Display index such as "A", "B1"; drives problem ordering
    pub display_index: String,
}

impl Problem {
    /// Ordering of problems within a contest: shorter display index first,
    /// then lexicographic ("A" < "Z" < "A1").
    pub fn index_cmp(a: &Problem, b: &Problem) -> Ordering {
        a.display_index
            .len()
            .cmp(&b.display_index.len())
            .then_with(|| a.display_index.cmp(&b.display_index))
    }
}

/// Named grouping of contests (e.g. a semester's training rounds)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContestGroup {
    pub id: i32,
    pub name: String,
    pub is_enable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(index: &str) -> Problem {
        Problem {
            contest_id: 1,
            judge_id: 1,
            problem_id: index.to_lowercase(),
            display_index: index.to_string(),
        }
    }

    #[test]
    fn judge_zero_is_manual() {
        let mut contest = Contest {
            id: 1,
            judge_id: 0,
            cid: String::new(),
            name: "Freshman Selection".to_string(),
            start_time: Utc::now(),
            duration_minutes: 300,
            max_solved: 0,
            participants: 0,
            problems: Vec::new(),
        };
        assert!(contest.is_manual());
        contest.judge_id = 1;
        assert!(!contest.is_manual());
    }

    #[test]
    fn problems_sort_by_length_then_alpha() {
        let mut problems = vec![problem("B1"), problem("Z"), problem("A1"), problem("A")];
        problems.sort_by(Problem::index_cmp);
        let order: Vec<_> = problems.iter().map(|p| p.display_index.as_str()).collect();
        assert_eq!(order, ["A", "Z", "A1", "B1"]);
    }
}
