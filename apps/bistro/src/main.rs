//! # Bistro Entry Point
//!
//! See the library crate for the startup sequence.

use std::process::ExitCode;

use bistro::CliArgs;
use tracing::error;

fn main() -> ExitCode {
    bistro::init_tracing();

    let result = CliArgs::parse(std::env::args().skip(1)).and_then(bistro::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
