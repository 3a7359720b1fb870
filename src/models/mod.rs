//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod event;
pub mod judge;
pub mod rating;
pub mod regional;
pub mod submission;
pub mod team;
pub mod user;

pub use contest::*;
pub use event::*;
pub use judge::*;
pub use rating::*;
pub use regional::*;
pub use submission::*;
pub use team::*;
pub use user::*;
