//! Hotel Booking prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    backend::{
        BackendError, BookingBackend, DEFAULT_BOOKING_ENDPOINT, HttpBackendConfig,
        HttpBookingBackend,
    },
    confirmation::{BOOKING_FORM_ROUTE, ConfirmationBooking, ConfirmationView, Navigation},
    controller::{BookingController, FormSnapshot, Phase, Settlement, SubmitOutcome},
    draft::{BookingDraft, Field},
    prices::Price,
    request::BookingRequest,
    rooms::RoomType,
    status::{StatusMessage, Tone},
    validation::{ValidationErrors, validate},
};
