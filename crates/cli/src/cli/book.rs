use std::io::Write;

use clap::Args;
use hotel_booking::prelude::*;
use tracing::info;

use crate::{cli::confirm, config::BackendConfig, errors::CliError};

#[derive(Debug, Args)]
pub(crate) struct BookArgs {
    /// Guest name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Room type (Single, Double, Deluxe, Suite, Family)
    #[arg(long, default_value = "Single")]
    pub room_type: String,

    /// Number of guests
    #[arg(long, default_value = "")]
    pub guests: String,

    /// Number of rooms
    #[arg(long, default_value = "")]
    pub rooms: String,

    /// Check-in, `YYYY-MM-DDTHH:MM`
    #[arg(long, default_value = "")]
    pub check_in: String,

    /// Check-out, `YYYY-MM-DDTHH:MM`
    #[arg(long, default_value = "")]
    pub check_out: String,

    /// Show the confirmation page once the booking succeeds
    #[arg(long)]
    pub show_confirmation: bool,

    /// Booking API settings.
    #[command(flatten)]
    pub backend: BackendConfig,
}

impl BookArgs {
    fn fields(&self) -> [(Field, &str); 7] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::RoomType, self.room_type.as_str()),
            (Field::Guests, self.guests.as_str()),
            (Field::Rooms, self.rooms.as_str()),
            (Field::CheckIn, self.check_in.as_str()),
            (Field::CheckOut, self.check_out.as_str()),
        ]
    }
}

pub(crate) async fn run(args: &BookArgs, out: &mut impl Write) -> Result<(), CliError> {
    let backend = HttpBookingBackend::new(args.backend.http()).map_err(CliError::Client)?;
    let controller =
        BookingController::new(backend).with_success_delay(args.backend.success_delay());

    for (field, value) in args.fields() {
        controller.update(field, value);
    }

    info!(endpoint = %args.backend.endpoint, "submitting booking");
    writeln!(out, "Processing...")?;

    match controller.submit().await {
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.entries() {
                writeln!(out, "{field}: {message}")?;
            }

            Err(CliError::InvalidDraft(errors.len()))
        }
        SubmitOutcome::AlreadySubmitting => Err(CliError::AlreadySubmitting),
        SubmitOutcome::Settled(settlement) => {
            if let Some(status) = controller.snapshot().status {
                writeln!(out, "{status}")?;
            }

            if settlement == Settlement::Failure {
                return Err(CliError::BookingFailed);
            }

            if args.show_confirmation {
                confirm::show(Some(controller.confirmation()), out)?;
            }

            Ok(())
        }
    }
}
