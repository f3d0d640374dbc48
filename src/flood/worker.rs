use reqwest::Client;
use tracing::warn;

use crate::config::RunConfig;
use crate::http::execute_attempt;
use crate::shutdown::ShutdownReceiver;

/// Per-runner outcome counts, folded into the final report.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct WorkerTally {
    pub(super) attempts: u64,
    pub(super) failures: u64,
}

/// Runs one runner: a strictly sequential loop of attempts.
///
/// A failed attempt is logged and absorbed; it never stops the loop.
/// The loop only ends early when shutdown is signalled, dropping any
/// in-flight request.
pub(super) async fn run_worker(
    worker_id: usize,
    config: &RunConfig,
    client: &Client,
    shutdown_rx: &mut ShutdownReceiver,
) -> WorkerTally {
    let mut tally = WorkerTally::default();
    for attempt in 0..config.attempts {
        let outcome = tokio::select! {
            _ = shutdown_rx.recv() => break,
            outcome = execute_attempt(client, config) => outcome,
        };
        tally.attempts = tally.attempts.saturating_add(1);
        if let Err(err) = outcome {
            tally.failures = tally.failures.saturating_add(1);
            warn!("Runner {} attempt {} failed: {}", worker_id, attempt, err);
        }
    }
    tally
}
