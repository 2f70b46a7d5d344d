//! Hotel Booking CLI
//!
//! Terminal front end for the hotel booking form and confirmation page.

use std::process::ExitCode;

use tracing::error;

use crate::cli::Cli;

mod cli;
mod config;
mod errors;
mod logging;

/// Hotel Booking CLI entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = logging::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("failed to initialize logging: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(command_error) => {
            error!("{command_error}");

            ExitCode::FAILURE
        }
    }
}
