//! Team response DTOs
//!
//! Teams serialize straight from the model; nothing to reshape here yet.

pub use crate::models::{Team, TeamGroup};
