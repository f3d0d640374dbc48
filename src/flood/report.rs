use chrono::SecondsFormat;

use crate::config::RunConfig;

use super::dispatcher::FloodReport;

/// Prints the planned work before any request is sent.
pub fn print_plan(config: &RunConfig) {
    println!(
        "Flood test: {} runners x {} attempts = {} random tokens against {}",
        config.runners,
        config.attempts,
        config.planned_attempts(),
        config.target
    );
}

/// Prints the aggregate outcome after every runner has finished.
pub fn print_report(report: &FloodReport) {
    println!(
        "Run started: {}",
        report.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    println!("Total attempts: {}", report.total_attempts);
    println!("Failed attempts: {}", report.failed_attempts);
    println!("Finished in {:.3}s", report.elapsed.as_secs_f64());
}
