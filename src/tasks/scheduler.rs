//! Cron scheduler for periodic scrape-task publication

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::config::SchedulerConfig;
use crate::db::repositories::JudgeRepository;
use crate::error::AppResult;

use super::queue::{ScrapeTask, TaskQueue};

/// How far back a periodic submission refresh looks. Overlapping windows
/// are fine, ingest deduplicates on (judge_id, sid).
const SUBMISSION_LOOKBACK_HOURS: i64 = 1;

/// Judge whose accounts carry a rating history worth refreshing.
const RATED_JUDGE_NAME: &str = "codeforces";

/// Scheduler that publishes refresh tasks on cron schedules
pub struct RefreshScheduler {
    config: SchedulerConfig,
    db: PgPool,
    queue: TaskQueue,
    scheduler: JobScheduler,
}

impl RefreshScheduler {
    /// Create a new refresh scheduler
    pub async fn new(config: SchedulerConfig, db: PgPool, queue: TaskQueue) -> anyhow::Result<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self {
            config,
            db,
            queue,
            scheduler,
        })
    }

    /// Add all refresh jobs to the scheduler
    pub async fn setup_jobs(&mut self) -> anyhow::Result<()> {
        self.add_submission_refresh_job().await?;
        self.add_rating_refresh_job().await?;
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> anyhow::Result<()> {
        self.scheduler.start().await?;
        Ok(())
    }

    /// Shutdown the scheduler gracefully
    pub async fn shutdown(&mut self) -> anyhow::Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    async fn add_submission_refresh_job(&self) -> anyhow::Result<()> {
        let db = self.db.clone();
        let queue = self.queue.clone();
        let cron_expr = self.config.submission_refresh_cron.clone();

        tracing::info!("Adding submission refresh job: {}", cron_expr);

        let job = Job::new_async(cron_expr.as_str(), move |_uuid, _lock| {
            let db = db.clone();
            let queue = queue.clone();

            Box::pin(async move {
                tracing::info!("Running submission refresh job");
                match publish_submission_refresh(&db, &queue).await {
                    Ok(count) => {
                        tracing::info!("Submission refresh: published {} tasks", count);
                    }
                    Err(e) => {
                        tracing::error!("Submission refresh failed: {}", e);
                    }
                }
            })
        })?;

        self.scheduler.add(job).await?;
        Ok(())
    }

    async fn add_rating_refresh_job(&self) -> anyhow::Result<()> {
        let db = self.db.clone();
        let queue = self.queue.clone();
        let cron_expr = self.config.rating_refresh_cron.clone();

        tracing::info!("Adding rating refresh job: {}", cron_expr);

        let job = Job::new_async(cron_expr.as_str(), move |_uuid, _lock| {
            let db = db.clone();
            let queue = queue.clone();

            Box::pin(async move {
                tracing::info!("Running rating refresh job");
                match publish_rating_refresh(&db, &queue).await {
                    Ok(count) => {
                        tracing::info!("Rating refresh: published {} tasks", count);
                    }
                    Err(e) => {
                        tracing::error!("Rating refresh failed: {}", e);
                    }
                }
            })
        })?;

        self.scheduler.add(job).await?;
        Ok(())
    }
}

/// Publish a submission refresh task for every bound account on every
/// enabled judge, over the default lookback window.
pub async fn publish_submission_refresh(db: &PgPool, queue: &TaskQueue) -> AppResult<usize> {
    let end = Utc::now();
    let begin = end - Duration::hours(SUBMISSION_LOOKBACK_HOURS);
    publish_submission_refresh_range(db, queue, begin, end).await
}

/// Same as [`publish_submission_refresh`] with a caller-chosen time range.
pub async fn publish_submission_refresh_range(
    db: &PgPool,
    queue: &TaskQueue,
    begin: chrono::DateTime<Utc>,
    end: chrono::DateTime<Utc>,
) -> AppResult<usize> {
    let mut published = 0;
    for judge in JudgeRepository::list_enabled(db).await? {
        let accounts = JudgeRepository::list_accounts(db, judge.id).await?;
        for account in accounts {
            let task = ScrapeTask::Submissions {
                handle: account.handle,
                begin,
                end,
            };
            queue.publish(judge.id, &task).await?;
            published += 1;
        }
    }
    Ok(published)
}

/// Publish a rating refresh task for every account on the rated judge.
pub async fn publish_rating_refresh(db: &PgPool, queue: &TaskQueue) -> AppResult<usize> {
    let Some(judge) = JudgeRepository::find_by_name(db, RATED_JUDGE_NAME).await? else {
        tracing::warn!("No judge named '{}', skipping rating refresh", RATED_JUDGE_NAME);
        return Ok(0);
    };

    let mut published = 0;
    for account in JudgeRepository::list_accounts(db, judge.id).await? {
        let task = ScrapeTask::Ratings {
            handle: account.handle,
        };
        queue.publish(judge.id, &task).await?;
        published += 1;
    }
    Ok(published)
}
