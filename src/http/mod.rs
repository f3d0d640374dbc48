//! HTTP client construction and single-attempt execution.
mod attempt;
mod bearer;
mod client;


pub use attempt::execute_attempt;
pub use bearer::random_bearer;
pub use client::build_client;
