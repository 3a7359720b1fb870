//! Redis Stream publisher for scrape tasks
//!
//! Scraper workers for each judge consume a dedicated stream; this side
//! only publishes. Payloads are JSON so workers in any language can read
//! them.

use chrono::{DateTime, Utc};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::constants::SCRAPE_STREAM_PREFIX;
use crate::error::AppResult;

/// A unit of scrape work for an external judge worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrapeTask {
    /// Fetch submissions for one account handle over a time range
    Submissions {
        handle: String,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Fetch contest metadata and problems for one contest
    Contest { cid: String },
    /// Fetch the full rating history for one account handle
    Ratings { handle: String },
}

/// Publishes scrape tasks onto per-judge Redis streams.
#[derive(Clone)]
pub struct TaskQueue {
    redis: ConnectionManager,
}

impl TaskQueue {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    /// Stream key for one judge, zero-padded so keys sort naturally.
    pub fn stream_key(judge_id: i32) -> String {
        format!("{SCRAPE_STREAM_PREFIX}{judge_id:02}")
    }

    /// Publish one task to the judge's stream. Returns the stream entry id.
    pub async fn publish(&self, judge_id: i32, task: &ScrapeTask) -> AppResult<String> {
        let payload = serde_json::to_string(task)
            .map_err(|e| anyhow::anyhow!("failed to serialize scrape task: {e}"))?;

        let mut conn = self.redis.clone();
        let key = Self::stream_key(judge_id);
        let entry_id: String = conn.xadd(&key, "*", &[("task", payload.as_str())]).await?;

        tracing::debug!(stream = %key, entry = %entry_id, "published scrape task");
        Ok(entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stream_keys_are_zero_padded() {
        assert_eq!(TaskQueue::stream_key(1), "scrape:01");
        assert_eq!(TaskQueue::stream_key(12), "scrape:12");
    }

    #[test]
    fn scrape_task_serializes_with_type_tag() {
        let task = ScrapeTask::Submissions {
            handle: "tourist".into(),
            begin: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"type\":\"submissions\""));
        assert!(json.contains("\"handle\":\"tourist\""));

        let task = ScrapeTask::Contest { cid: "1700".into() };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"type\":\"contest\""));
    }
}
