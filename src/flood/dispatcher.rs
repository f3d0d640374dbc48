use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::http::build_client;
use crate::shutdown::ShutdownSender;

use super::worker::{WorkerTally, run_worker};

/// Aggregate outcome of a whole run.
#[derive(Debug, Clone)]
pub struct FloodReport {
    pub started_at: DateTime<Utc>,
    pub total_attempts: u64,
    pub failed_attempts: u64,
    pub elapsed: Duration,
}

/// Launches all runners concurrently and joins on every one of them.
///
/// Attempt failures are absorbed inside the runners and only show up in
/// the report counts. Elapsed time spans first launch to last completion.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or a runner
/// task cannot be joined.
pub async fn run_flood(config: &RunConfig, shutdown_tx: &ShutdownSender) -> AppResult<FloodReport> {
    let client = build_client(config)?;
    let started_at = Utc::now();
    let started = Instant::now();

    let mut handles = Vec::with_capacity(config.runners);
    for worker_id in 0..config.runners {
        let config = config.clone();
        let client = client.clone();
        let mut shutdown_rx = shutdown_tx.subscribe();
        handles.push(tokio::spawn(async move {
            run_worker(worker_id, &config, &client, &mut shutdown_rx).await
        }));
    }

    let mut total = WorkerTally::default();
    for handle in handles {
        let tally = handle.await?;
        total.attempts = total.attempts.saturating_add(tally.attempts);
        total.failures = total.failures.saturating_add(tally.failures);
    }

    Ok(FloodReport {
        started_at,
        total_attempts: total.attempts,
        failed_attempts: total.failures,
        elapsed: started.elapsed(),
    })
}
