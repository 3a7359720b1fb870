//! Contest standings computation
//!
//! Pure, synchronous reduction of raw submissions into ranked team rows.
//! Everything here operates on an immutable snapshot fetched by the caller;
//! no I/O, no shared state, safe to invoke concurrently per request.

pub mod builder;
pub mod problem_result;

pub use builder::{build_standings, Standing, StandingRow, StandingsError, TieBreak};
pub use problem_result::{calc_problem_result, ProblemResult, SubmissionInfo, UNSOLVED};
