use super::*;
use crate::error::{AppError, AppResult};
use clap::Parser;
use std::time::Duration;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = FloodArgs::try_parse_from(["authflood", "--ip", "192.168.0.10"])
        .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))?;

    if args.ip.as_deref() != Some("192.168.0.10") {
        return Err(AppError::validation("Unexpected ip"));
    }
    if args.runners.get() != 10 {
        return Err(AppError::validation("Unexpected default runners"));
    }
    if args.attempts.get() != 100 {
        return Err(AppError::validation("Unexpected default attempts"));
    }
    if args.body_file != "ruuvi.json" {
        return Err(AppError::validation("Unexpected default body file"));
    }
    if args.request_timeout != Duration::from_secs(10) {
        return Err(AppError::validation("Unexpected default request timeout"));
    }
    if args.connect_timeout != Duration::from_secs(5) {
        return Err(AppError::validation("Unexpected default connect timeout"));
    }
    Ok(())
}

#[test]
fn parse_args_explicit_flags() -> AppResult<()> {
    let args = FloodArgs::try_parse_from([
        "authflood",
        "--ip",
        "gateway.local:8080",
        "--runners",
        "4",
        "--attempts",
        "25",
        "--body",
        "payload.json",
        "--timeout",
        "500ms",
        "--connect-timeout",
        "2s",
    ])
    .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))?;

    if args.ip.as_deref() != Some("gateway.local:8080") {
        return Err(AppError::validation("Unexpected ip"));
    }
    if args.runners.get() != 4 {
        return Err(AppError::validation("Unexpected runners"));
    }
    if args.attempts.get() != 25 {
        return Err(AppError::validation("Unexpected attempts"));
    }
    if args.body_file != "payload.json" {
        return Err(AppError::validation("Unexpected body file"));
    }
    if args.request_timeout != Duration::from_millis(500) {
        return Err(AppError::validation("Unexpected request timeout"));
    }
    if args.connect_timeout != Duration::from_secs(2) {
        return Err(AppError::validation("Unexpected connect timeout"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_runners() -> AppResult<()> {
    let result = FloodArgs::try_parse_from(["authflood", "--ip", "localhost", "--runners", "0"]);
    if result.is_ok() {
        return Err(AppError::validation("Expected parse failure for 0 runners"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_attempts() -> AppResult<()> {
    let result = FloodArgs::try_parse_from(["authflood", "--ip", "localhost", "--attempts", "0"]);
    if result.is_ok() {
        return Err(AppError::validation(
            "Expected parse failure for 0 attempts",
        ));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_unknown_flag() -> AppResult<()> {
    let result = FloodArgs::try_parse_from(["authflood", "--ip", "localhost", "--bogus"]);
    if result.is_ok() {
        return Err(AppError::validation(
            "Expected parse failure for unknown flag",
        ));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_bad_duration() -> AppResult<()> {
    let result =
        FloodArgs::try_parse_from(["authflood", "--ip", "localhost", "--timeout", "fast"]);
    if result.is_ok() {
        return Err(AppError::validation(
            "Expected parse failure for bad duration",
        ));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("30", Duration::from_secs(30)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parsers::parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for '{}'",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_zero() -> AppResult<()> {
    if parsers::parse_duration_arg("0s").is_ok() {
        return Err(AppError::validation("Expected failure for zero duration"));
    }
    Ok(())
}
