mod app;
mod attempt;
mod config;
mod http;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use attempt::AttemptError;
pub use config::ConfigError;
pub use http::HttpError;
pub use validation::ValidationError;
