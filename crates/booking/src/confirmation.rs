//! Booking confirmation
//!
//! Read-only view of a booking handed over through navigation state. The view never fetches or
//! stores the booking; without one it redirects to the booking form.
//!
//! While mounted, the view cycles its background image through [`BACKGROUNDS`] every
//! [`ROTATION_PERIOD`] on a Tokio task that is aborted when the view is dropped.

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Columns},
};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::debug;

use crate::draft::BookingDraft;

/// Route of the booking form.
pub const BOOKING_FORM_ROUTE: &str = "/book-room";

/// Background images, in display order.
pub const BACKGROUNDS: [&str; 4] = [
    "/images/hotel-bg1.jpg",
    "/images/hotel-bg2.jpg",
    "/images/hotel-bg3.jpg",
    "/images/hotel-bg4.jpg",
];

/// Time each background stays on screen.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// Booking details passed to the confirmation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationBooking {
    /// Guest name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Check-in, as entered
    pub check_in: String,

    /// Check-out, as entered
    pub check_out: String,

    /// Room type name
    pub room_type: String,

    /// Number of guests, as entered
    #[serde(deserialize_with = "text_or_number")]
    pub guests: String,
}

impl From<&BookingDraft> for ConfirmationBooking {
    fn from(draft: &BookingDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            check_in: draft.check_in.clone(),
            check_out: draft.check_out.clone(),
            room_type: draft.room_type.clone(),
            guests: draft.guests.clone(),
        }
    }
}

impl ConfirmationBooking {
    /// Labelled fields, in display order.
    pub fn details(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Check-In", self.check_in.as_str()),
            ("Check-Out", self.check_out.as_str()),
            ("Room Type", self.room_type.as_str()),
            ("No. of Guests", self.guests.as_str()),
        ]
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Result of navigating to the confirmation view.
#[derive(Debug)]
pub enum Navigation {
    /// No booking was supplied; go to this route instead and render nothing.
    Redirect(&'static str),

    /// The mounted view.
    Show(ConfirmationView),
}

/// Mounted confirmation view.
#[derive(Debug)]
pub struct ConfirmationView {
    booking: ConfirmationBooking,
    rotation: BackgroundRotation,
}

impl ConfirmationView {
    /// Enters the view with the booking from navigation state.
    ///
    /// Mounting starts the background rotation on the current Tokio runtime. Outside a runtime
    /// the view stays on the first background.
    pub fn enter(booking: Option<ConfirmationBooking>) -> Navigation {
        let Some(booking) = booking else {
            debug!(route = BOOKING_FORM_ROUTE, "no booking supplied, redirecting");

            return Navigation::Redirect(BOOKING_FORM_ROUTE);
        };

        Navigation::Show(Self {
            booking,
            rotation: BackgroundRotation::start(ROTATION_PERIOD),
        })
    }

    /// The booking being shown.
    pub fn booking(&self) -> &ConfirmationBooking {
        &self.booking
    }

    /// Background image currently on screen.
    pub fn background(&self) -> &'static str {
        self.rotation.current()
    }

    /// Writes the confirmation to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        for (label, value) in self.booking.details() {
            builder.push_record([label, value]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::first(), Color::BOLD);

        writeln!(out, "Thank you for your booking!")?;
        writeln!(out, "Here are your booking details:")?;
        writeln!(out, "{table}")
    }
}

/// Periodic background image rotation, cancelled on drop.
#[derive(Debug)]
pub struct BackgroundRotation {
    index: Arc<AtomicUsize>,
    task: Option<JoinHandle<()>>,
}

impl BackgroundRotation {
    /// Starts at the first background and advances once per `period`, wrapping around.
    ///
    /// Without a current Tokio runtime the rotation never advances.
    pub fn start(period: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));
        let shared = Arc::downgrade(&index);

        let Ok(runtime) = Handle::try_current() else {
            debug!("no tokio runtime, background rotation disabled");

            return Self { index, task: None };
        };

        let task = runtime.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);

            loop {
                ticks.tick().await;

                let Some(index) = shared.upgrade() else {
                    break;
                };

                let next = (index.load(Ordering::Relaxed) + 1) % BACKGROUNDS.len();
                index.store(next, Ordering::Relaxed);
            }
        });

        Self {
            index,
            task: Some(task),
        }
    }

    /// Position of the current background in [`BACKGROUNDS`].
    pub fn index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    /// Current background image.
    pub fn current(&self) -> &'static str {
        BACKGROUNDS.get(self.index()).copied().unwrap_or_default()
    }

    #[cfg(test)]
    fn stop(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for BackgroundRotation {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
