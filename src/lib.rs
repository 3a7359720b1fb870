//! AlgoClub - Competitive Programming Club Portal Backend
//!
//! Backend for a university competitive-programming club: members, teams,
//! contests and their standings, scraped submissions and ratings from
//! external judges, onsite regional awards, and club events.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Standings**: the pure contest-scoring core, free of any I/O
//! - **Tasks**: scrape task publishing and cron refresh jobs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod standings;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
