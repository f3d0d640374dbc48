use thiserror::Error;

/// Outcome of a single failed request attempt.
///
/// Absorbed at the worker level: attempt errors are logged and never
/// propagate past the runner loop.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}
