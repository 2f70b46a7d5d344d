//! Hotel Booking
//!
//! Client-side booking workflow for the hotel reservation API: a form controller that validates
//! guest and stay details, prices the stay, submits it to the booking endpoint and reports the
//! outcome, plus a read-only confirmation view for an already-made booking.

pub mod backend;
pub mod confirmation;
pub mod controller;
pub mod draft;
pub mod prelude;
pub mod prices;
pub mod request;
pub mod rooms;
pub mod status;
pub mod validation;
