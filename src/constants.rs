//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// How long an acquire may wait on a saturated pool before failing
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Cookie name carrying the session id
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Redis key prefix for stored sessions
pub const SESSION_KEY_PREFIX: &str = "session:";

// =============================================================================
// SCRAPE TASK QUEUE
// =============================================================================

/// Prefix for per-judge scrape task streams; the judge id is appended
/// zero-padded to two digits (e.g. `scrape:01`)
pub const SCRAPE_STREAM_PREFIX: &str = "scrape:";

/// Default cron expression for periodic submission refresh (every 30 minutes)
pub const DEFAULT_SUBMISSION_REFRESH_CRON: &str = "0 */30 * * * *";

/// Default cron expression for periodic rating refresh (every 30 minutes,
/// offset from the submission job)
pub const DEFAULT_RATING_REFRESH_CRON: &str = "0 15,45 * * * *";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 1;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Maximum contest name length
pub const MAX_CONTEST_NAME_LENGTH: u64 = 256;

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: u64 = 128;

/// Maximum event markdown size in bytes (1 MB)
pub const MAX_EVENT_MARKDOWN_SIZE: u64 = 1024 * 1024;
