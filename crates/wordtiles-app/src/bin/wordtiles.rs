//! Replays pointer scripts against a wordtiles puzzle.

use std::{io, process::ExitCode};

use clap::Parser as _;
use wordtiles_app::cli::{self, Args};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    match cli::run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
