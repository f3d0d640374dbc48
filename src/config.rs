//! Run configuration assembled once at startup and shared read-only
//! across all runners.
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::args::FloodArgs;
use crate::error::{AppError, AppResult, ConfigError};

/// Fixed request path on the target gateway.
const TARGET_PATH: &str = "/ruuvi.json";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: Url,
    pub runners: usize,
    pub attempts: u64,
    pub payload: Arc<[u8]>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl RunConfig {
    /// Builds the immutable run configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the target host is missing or invalid, or when
    /// the body file cannot be read.
    pub fn from_args(args: &FloodArgs) -> AppResult<Self> {
        let host = args
            .ip
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .ok_or_else(|| AppError::config(ConfigError::MissingHost))?;

        let target = Url::parse(&format!("http://{}{}", host, TARGET_PATH)).map_err(|err| {
            AppError::config(ConfigError::InvalidHost {
                host: host.to_owned(),
                source: err,
            })
        })?;

        let payload = std::fs::read(&args.body_file).map_err(|err| {
            AppError::config(ConfigError::ReadBodyFile {
                path: PathBuf::from(&args.body_file),
                source: err,
            })
        })?;

        Ok(Self {
            target,
            runners: args.runners.get(),
            attempts: args.attempts.get(),
            payload: Arc::from(payload.into_boxed_slice()),
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
        })
    }

    /// Total attempts the run will issue: runners x attempts per runner.
    #[must_use]
    pub fn planned_attempts(&self) -> u64 {
        u64::try_from(self.runners)
            .unwrap_or(u64::MAX)
            .saturating_mul(self.attempts)
    }
}
