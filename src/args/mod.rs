//! CLI argument types and parsing helpers.
mod cli;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::FloodArgs;
pub use types::{PositiveU64, PositiveUsize};
