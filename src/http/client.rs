use std::time::Duration;

use reqwest::Client;

use crate::config::RunConfig;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the shared HTTP client for a run.
///
/// Keep-alive stays off so every attempt opens its own connection;
/// pooled sockets would serialize concurrent attempts.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(config: &RunConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(0)
        .pool_idle_timeout(Some(Duration::from_secs(0)))
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
