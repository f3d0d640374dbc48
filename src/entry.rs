use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

use crate::args::FloodArgs;
use crate::config::RunConfig;
use crate::error::AppResult;
use crate::flood::{print_plan, print_report, run_flood};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = RunConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config))
}

fn parse_args() -> AppResult<FloodArgs> {
    let cmd = FloodArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    let matches = cmd.get_matches_from(raw_args);
    let args = FloodArgs::from_arg_matches(&matches)?;

    Ok(args)
}

async fn run_async(config: RunConfig) -> AppResult<()> {
    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    print_plan(&config);
    let report = run_flood(&config, &shutdown_tx).await?;
    print_report(&report);

    drop(shutdown_tx.send(()));
    signal_handle.await?;

    Ok(())
}
