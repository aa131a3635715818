//! The `seqdraw` binary.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use seqdraw::SeqdrawError;
use seqdraw_cli::{Args, error_adapter::render_reports};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args);
    debug!(args:?; "Command line");

    match seqdraw_cli::run(&args) {
        Ok(()) => {
            info!(output = args.output; "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(args: &Args) {
    let level = args.log_filter().unwrap_or_else(|| {
        eprintln!("unknown log level `{}`, logging warnings only", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
}

fn report(err: &SeqdrawError) {
    let handler = GraphicalReportHandler::new();
    for rendered in render_reports(err, &handler) {
        error!("{rendered}");
    }
}
