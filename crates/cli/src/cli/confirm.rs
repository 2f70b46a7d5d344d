use std::io::Write;

use clap::Args;
use hotel_booking::confirmation::{ConfirmationBooking, ConfirmationView, Navigation};
use tracing::debug;

use crate::errors::CliError;

#[derive(Debug, Args)]
pub(crate) struct ConfirmArgs {
    /// Booking navigation state, e.g. `{"name": "...", "email": "...", "checkIn": "...",
    /// "checkOut": "...", "roomType": "...", "guests": 2}`
    #[arg(long, value_parser = parse_booking)]
    pub booking: Option<ConfirmationBooking>,
}

pub(crate) fn run(args: ConfirmArgs, out: &mut impl Write) -> Result<(), CliError> {
    show(args.booking, out)
}

/// Enters the confirmation view, printing the redirect target when there is no booking.
pub(crate) fn show(
    booking: Option<ConfirmationBooking>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match ConfirmationView::enter(booking) {
        Navigation::Redirect(route) => {
            writeln!(out, "No booking to show; go to {route}")?;
        }
        Navigation::Show(view) => {
            debug!(background = view.background(), "showing confirmation");

            view.write_to(out)?;
        }
    }

    Ok(())
}

fn parse_booking(raw: &str) -> Result<ConfirmationBooking, serde_json::Error> {
    serde_json::from_str(raw)
}
