//! Per-problem outcome of one contestant's submission stream

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `accepted_time` value meaning the problem was never accepted.
pub const UNSOLVED: i64 = -1;

/// One submission attempt, as shown in standings detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionInfo {
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
}

/// Outcome of one contestant (or team) on one problem.
///
/// `accepted_time` encodes the solve state in three bands:
/// `-1` never accepted, `0..=duration` accepted within the contest window
/// (minutes since contest start), `duration + 1` accepted outside the
/// window ("upsolved"). `dirt` counts rejected attempts strictly before the
/// first accept, or all attempts when never accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemResult {
    pub accepted_time: i64,
    pub dirt: i64,
    pub submissions: Vec<SubmissionInfo>,
}

impl ProblemResult {
    /// Placeholder for a contestant with no attempts on a problem.
    pub fn empty() -> Self {
        Self {
            accepted_time: UNSOLVED,
            dirt: 0,
            submissions: Vec::new(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.accepted_time != UNSOLVED
    }

    /// Total order used when merging member results into a team result:
    /// a solved result beats an unsolved one; among two solved (or two
    /// unsolved) results, fewer rejected attempts wins.
    ///
    /// Returns true when `self` ranks strictly below `other`.
    fn ranks_below(&self, other: &ProblemResult) -> bool {
        match (self.is_solved(), other.is_solved()) {
            (true, false) => false,
            (false, true) => true,
            _ => self.dirt > other.dirt,
        }
    }

    /// The better of two results; ties keep `a`.
    pub fn better_of(a: ProblemResult, b: ProblemResult) -> ProblemResult {
        if a.ranks_below(&b) { b } else { a }
    }
}

/// Reduce one contestant's attempts on one problem into a [`ProblemResult`].
///
/// The input list carries no ordering guarantee; attempts are stable-sorted
/// by creation time before accounting. The accept minute is the floored
/// division of the signed second offset from `start`, so an accept before
/// the start lands below zero and normalizes into the upsolved band.
pub fn calc_problem_result(
    submissions: &[SubmissionInfo],
    start: DateTime<Utc>,
    duration_minutes: i64,
) -> ProblemResult {
    let mut attempts = submissions.to_vec();
    attempts.sort_by_key(|s| s.create_time);

    let mut accepted_at: Option<i64> = None;
    let mut dirt = 0;
    for s in &attempts {
        if accepted_at.is_some() {
            continue;
        }
        if s.is_accepted {
            let seconds = s.create_time.signed_duration_since(start).num_seconds();
            accepted_at = Some(seconds.div_euclid(60));
        } else {
            dirt += 1;
        }
    }

    let accepted_time = match accepted_at {
        None => UNSOLVED,
        Some(t) if t < 0 || t > duration_minutes => duration_minutes + 1,
        Some(t) => t,
    };

    ProblemResult {
        accepted_time,
        dirt,
        submissions: attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn at_seconds(offset: i64) -> DateTime<Utc> {
        start() + chrono::Duration::seconds(offset)
    }

    fn sub(is_accepted: bool, offset_seconds: i64) -> SubmissionInfo {
        SubmissionInfo {
            is_accepted,
            create_time: at_seconds(offset_seconds),
        }
    }

    #[test]
    fn empty_input_is_unsolved() {
        let r = calc_problem_result(&[], start(), 120);
        assert_eq!(r.accepted_time, UNSOLVED);
        assert_eq!(r.dirt, 0);
        assert!(r.submissions.is_empty());
    }

    #[test]
    fn rejected_then_accepted() {
        // Rejected at +10min, accepted at +15min: accepted_time=15, dirt=1.
        let r = calc_problem_result(&[sub(false, 600), sub(true, 900)], start(), 120);
        assert_eq!(r.accepted_time, 15);
        assert_eq!(r.dirt, 1);
        assert_eq!(r.submissions.len(), 2);
    }

    #[test]
    fn accept_after_window_is_upsolved() {
        // Accepted at +200min in a 120-minute contest.
        let r = calc_problem_result(&[sub(true, 200 * 60)], start(), 120);
        assert_eq!(r.accepted_time, 121);
        assert_eq!(r.dirt, 0);
        assert!(r.is_solved());
    }

    #[test]
    fn accept_before_start_is_upsolved() {
        // 90 seconds before the start: floored minute is -2, normalized to
        // the upsolved band rather than leaking a negative in-window value.
        let r = calc_problem_result(&[sub(true, -90)], start(), 120);
        assert_eq!(r.accepted_time, 121);
    }

    #[test]
    fn accept_at_window_edge_stays_in_window() {
        let r = calc_problem_result(&[sub(true, 120 * 60)], start(), 120);
        assert_eq!(r.accepted_time, 120);
        let r = calc_problem_result(&[sub(true, 120 * 60 + 59)], start(), 120);
        assert_eq!(r.accepted_time, 120);
        let r = calc_problem_result(&[sub(true, 121 * 60)], start(), 120);
        assert_eq!(r.accepted_time, 121);
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = vec![sub(false, 300), sub(false, 400), sub(true, 500)];
        let mut shuffled = vec![sub(true, 500), sub(false, 300), sub(false, 400)];
        let a = calc_problem_result(&forward, start(), 120);
        let b = calc_problem_result(&shuffled, start(), 120);
        assert_eq!(a, b);
        shuffled.reverse();
        let c = calc_problem_result(&shuffled, start(), 120);
        assert_eq!(a, c);
    }

    #[test]
    fn attempts_after_accept_do_not_change_accounting() {
        let base = calc_problem_result(&[sub(false, 60), sub(true, 120)], start(), 120);
        let with_tail = calc_problem_result(
            &[sub(false, 60), sub(true, 120), sub(false, 180), sub(true, 240)],
            start(),
            120,
        );
        assert_eq!(base.accepted_time, with_tail.accepted_time);
        assert_eq!(base.dirt, with_tail.dirt);
        // Later attempts still appear in the display record.
        assert_eq!(with_tail.submissions.len(), 4);
    }

    #[test]
    fn never_accepted_counts_all_attempts_as_dirt() {
        let r = calc_problem_result(&[sub(false, 60), sub(false, 120), sub(false, 180)], start(), 120);
        assert_eq!(r.accepted_time, UNSOLVED);
        assert_eq!(r.dirt, 3);
    }

    #[test]
    fn band_invariant() {
        let duration = 120;
        let cases = [
            vec![],
            vec![sub(false, 30)],
            vec![sub(true, -3600)],
            vec![sub(true, 0)],
            vec![sub(true, duration * 60)],
            vec![sub(true, duration * 60 * 10)],
            vec![sub(false, 10), sub(true, 20), sub(false, 30)],
        ];
        for c in &cases {
            let r = calc_problem_result(c, start(), duration);
            assert!(
                r.accepted_time == UNSOLVED
                    || (0..=duration).contains(&r.accepted_time)
                    || r.accepted_time == duration + 1,
                "out-of-band accepted_time {}",
                r.accepted_time
            );
            assert!(r.dirt >= 0);
        }
    }

    fn result(accepted_time: i64, dirt: i64) -> ProblemResult {
        ProblemResult {
            accepted_time,
            dirt,
            submissions: Vec::new(),
        }
    }

    #[test]
    fn better_of_prefers_solved() {
        let solved = result(30, 5);
        let unsolved = result(UNSOLVED, 0);
        assert_eq!(ProblemResult::better_of(solved.clone(), unsolved.clone()), solved);
        assert_eq!(ProblemResult::better_of(unsolved, solved.clone()), solved);
    }

    #[test]
    fn better_of_prefers_fewer_dirt_among_solved() {
        let clean = result(100, 0);
        let dirty = result(10, 3);
        assert_eq!(ProblemResult::better_of(dirty.clone(), clean.clone()), clean);
        assert_eq!(ProblemResult::better_of(clean.clone(), dirty), clean);
    }

    #[test]
    fn better_of_prefers_fewer_dirt_among_unsolved() {
        let two_attempts = result(UNSOLVED, 2);
        let five_attempts = result(UNSOLVED, 5);
        assert_eq!(
            ProblemResult::better_of(five_attempts, two_attempts.clone()),
            two_attempts
        );
    }

    #[test]
    fn better_of_keeps_first_on_tie() {
        let mut a = result(15, 1);
        a.submissions.push(SubmissionInfo {
            is_accepted: true,
            create_time: at_seconds(900),
        });
        let b = result(40, 1);
        assert_eq!(ProblemResult::better_of(a.clone(), b), a);
    }
}
