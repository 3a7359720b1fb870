//! Database repositories
//!
//! Each repository owns the SQL for one aggregate and returns model
//! structs. Handlers and services never write SQL directly.

pub mod contest_repo;
pub mod event_repo;
pub mod judge_repo;
pub mod rating_repo;
pub mod regional_repo;
pub mod submission_repo;
pub mod team_repo;
pub mod user_repo;

pub use contest_repo::ContestRepository;
pub use event_repo::EventRepository;
pub use judge_repo::JudgeRepository;
pub use rating_repo::RatingRepository;
pub use regional_repo::RegionalRepository;
pub use submission_repo::{DailyCount, ScrapedSubmission, SubmissionRepository};
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
