use std::io;

use clap::{Parser, Subcommand};

use crate::{config::LoggingConfig, errors::CliError};

mod book;
mod confirm;
mod rooms;

#[derive(Debug, Parser)]
#[command(name = "hotel-booking", about = "Hotel booking client", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fill in the booking form and submit it
    Book(book::BookArgs),

    /// Show the confirmation page for a booking
    Confirm(confirm::ConfirmArgs),

    /// List room types and their base rates
    Rooms,
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), CliError> {
        let mut out = io::stdout().lock();

        match self.command {
            Commands::Book(args) => book::run(&args, &mut out).await,
            Commands::Confirm(args) => confirm::run(args, &mut out),
            Commands::Rooms => rooms::run(&mut out),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_book_command_with_defaults() -> TestResult {
        let cli = Cli::try_parse_from([
            "hotel-booking",
            "book",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
        ])?;

        let Commands::Book(args) = cli.command else {
            unreachable!("book subcommand was given");
        };

        assert_eq!(args.room_type, "Single");
        assert_eq!(args.backend.endpoint, "http://localhost:8000/api/booking/");
        assert_eq!(args.backend.success_delay_ms, 1_000);
        assert!(!args.show_confirmation);

        Ok(())
    }

    #[test]
    fn log_options_are_accepted_after_the_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["hotel-booking", "rooms", "--log-format", "json"])?;

        assert!(matches!(cli.logging.log_format, crate::config::LogFormat::Json));
        assert!(matches!(cli.command, Commands::Rooms));

        Ok(())
    }

    #[test]
    fn malformed_booking_state_is_a_usage_error() {
        let result = Cli::try_parse_from(["hotel-booking", "confirm", "--booking", "{not json"]);

        assert!(result.is_err());
    }
}
