mod args;
mod config;
mod entry;
mod error;
mod flood;
mod http;
mod logger;
mod shutdown;
mod shutdown_handlers;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
