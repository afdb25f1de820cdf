//! Startup and daily triggers for the ingest cycle

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::update_player_data::{handle_update_player_data, IngestJob};
use crate::Result;

/// Every day at 00:00:00 (cron crate format: sec min hour day month day-of-week).
pub const DAILY_INGEST_CRON: &str = "0 0 0 * * *";

/// Timezone the daily trigger is evaluated in.
pub const INGEST_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// A cron schedule pinned to a timezone.
#[derive(Debug, Clone)]
pub struct DailySchedule {
    schedule: Schedule,
    tz: Tz,
}

impl DailySchedule {
    pub fn new(expression: &str, tz: Tz) -> Result<Self> {
        Ok(Self {
            schedule: Schedule::from_str(expression)?,
            tz,
        })
    }

    /// Midnight, America/Chicago.
    pub fn midnight_central() -> Result<Self> {
        Self::new(DAILY_INGEST_CRON, INGEST_TIMEZONE)
    }

    /// First fire time strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.schedule
            .after(&now.with_timezone(&self.tz))
            .next()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Handles to the two background ingest tasks.
pub struct IngestTasks {
    pub startup: JoinHandle<()>,
    pub daily: JoinHandle<()>,
}

impl IngestTasks {
    pub fn abort(&self) {
        self.startup.abort();
        self.daily.abort();
    }
}

/// Spawn the immediate startup cycle and the recurring daily trigger.
///
/// Neither task is awaited by the caller; request handling starts right away.
pub fn spawn_ingest_tasks(job: Arc<IngestJob>, schedule: DailySchedule) -> IngestTasks {
    let startup_job = Arc::clone(&job);
    let startup = tokio::spawn(async move {
        info!(season = %startup_job.season(), "running startup ingest");
        handle_update_player_data(&startup_job).await;
    });

    let daily = tokio::spawn(run_daily(job, schedule));

    IngestTasks { startup, daily }
}

/// Sleep until each fire time and run one cycle, forever.
///
/// The next fire time is computed after every run, so a cycle that overruns
/// midnight or a suspended process simply skips the missed day.
async fn run_daily(job: Arc<IngestJob>, schedule: DailySchedule) {
    loop {
        let now = Utc::now();
        let Some(next) = schedule.next_after(now) else {
            warn!("schedule has no upcoming fire time; daily ingest stopped");
            return;
        };
        info!(next_run = %next, "next scheduled ingest");

        let delay = (next - now).to_std().unwrap_or_default();
        tokio::time::sleep(delay).await;

        handle_update_player_data(&job).await;
    }
}
