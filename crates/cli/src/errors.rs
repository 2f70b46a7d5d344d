//! Command errors.

use std::io;

use hotel_booking::backend::BackendError;
use thiserror::Error;

/// Reasons a command did not complete.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The HTTP client could not be created.
    #[error("failed to initialise the booking client")]
    Client(#[source] BackendError),

    /// The booking form has invalid fields.
    #[error("booking form has {0} invalid field(s)")]
    InvalidDraft(usize),

    /// Another submission was still in flight.
    #[error("a booking submission is already in flight")]
    AlreadySubmitting,

    /// The booking API rejected the booking or could not be reached.
    #[error("booking was not completed")]
    BookingFailed,

    /// Command output could not be written.
    #[error("failed to write output")]
    Io(#[from] io::Error),
}
