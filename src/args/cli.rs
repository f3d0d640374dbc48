use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent auth-path flood tester - hammers a gateway endpoint with randomized bearer tokens and times the whole run."
)]
pub struct FloodArgs {
    /// Target gateway IP or host name (may include a port)
    #[arg(long, env = "RUUVI_IP")]
    pub ip: Option<String>,

    /// Number of concurrent runners
    #[arg(long, default_value = "10", value_parser = parse_positive_usize)]
    pub runners: PositiveUsize,

    /// Requests issued by each runner
    #[arg(long, default_value = "100", value_parser = parse_positive_u64)]
    pub attempts: PositiveU64,

    /// JSON body file sent with every request
    #[arg(long = "body", default_value = "ruuvi.json")]
    pub body_file: String,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Enable verbose logging (sets log level to debug unless overridden by AUTHFLOOD_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
