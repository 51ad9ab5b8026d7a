mod args;
mod batch;
mod error;
mod io;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    common::log_setup::setup_logging(&args.log_level, &args.log_dir);

    match batch::run(&args) {
        Ok(summary) => {
            if summary.skipped > 0 {
                tracing::warn!("{} file(s) were skipped", summary.skipped);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
