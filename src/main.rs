use clap::Parser;
use std::process::ExitCode;

mod classify;
mod cli;
mod config;
mod diagnostics;
mod error;
mod io;
mod lines;
mod metrics;
mod patterns;
mod pipeline;
mod render;
mod report;
mod workflow;

use cli::{Command, RootArgs};
use config::LogConfig;
use error::ClassificationError;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    if let Err(err) = LogConfig::from_env(args.command.verbose()).init() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    let result = match &args.command {
        Command::Renumber(args) => workflow::run_renumber(args),
        Command::Classify(args) => workflow::run_classify(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Classification failures were already reported through the logger.
        Err(err) => match err.downcast_ref::<ClassificationError>() {
            Some(failure) => ExitCode::from(failure.exit_code()),
            None => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
