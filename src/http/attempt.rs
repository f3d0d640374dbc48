use futures_util::StreamExt;
use reqwest::Client;

use crate::config::RunConfig;
use crate::error::AttemptError;

use super::bearer::random_bearer;

/// Issues one POST with a freshly randomized bearer token.
///
/// # Errors
///
/// Returns an error for any non-2xx status, timeout, or transport fault.
/// The caller decides what to do with it; this function never retries.
pub async fn execute_attempt(client: &Client, config: &RunConfig) -> Result<(), AttemptError> {
    let response = client
        .post(config.target.clone())
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", random_bearer()))
        .body(config.payload.to_vec())
        .send()
        .await
        .map_err(classify_transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(AttemptError::Status {
            status: status.as_u16(),
        });
    }

    drain_response_body(response).await
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), AttemptError> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk.map_err(classify_transport)?;
    }
    Ok(())
}

fn classify_transport(err: reqwest::Error) -> AttemptError {
    if err.is_timeout() {
        AttemptError::Timeout { source: err }
    } else {
        AttemptError::Transport { source: err }
    }
}
