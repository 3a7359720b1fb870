//! Background work: scrape task publishing and periodic refresh jobs

pub mod queue;
pub mod scheduler;

pub use queue::{ScrapeTask, TaskQueue};
pub use scheduler::RefreshScheduler;
