//! Business logic services

pub mod contest_service;
pub mod rating_service;
pub mod standings_service;
pub mod submission_service;
pub mod team_service;
pub mod user_service;

pub use contest_service::ContestService;
pub use rating_service::RatingService;
pub use standings_service::StandingsService;
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
pub use user_service::UserService;
