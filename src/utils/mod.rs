//! Utility functions

pub mod time;

pub use time::day_span;
