//! Booking form controller
//!
//! Owns the draft and the form's presentation state (loading flag, status message and field
//! errors) and drives a submission through validation, the booking API call and settlement.
//!
//! At most one submission is in flight per controller. A submit attempted while another is
//! [`Phase::Submitting`] is turned away without validating or touching the network.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use serde::Serialize;
use tokio::time;
use tracing::{debug, warn};

use crate::{
    backend::{BackendError, BookingBackend},
    confirmation::ConfirmationBooking,
    draft::{BookingDraft, Field},
    request::BookingRequest,
    status::StatusMessage,
    validation::{ValidationErrors, validate},
};

/// Pause before an accepted booking is reported.
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_millis(1000);

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// The booking API accepted the booking.
    Success,

    /// The booking API rejected the booking or could not be reached.
    Failure,
}

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing submitted, or the last attempt failed validation.
    #[default]
    Idle,

    /// Waiting on the booking API.
    Submitting,

    /// The last submission finished.
    Settled(Settlement),
}

/// Result of a call to [`BookingController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was sent.
    Invalid(ValidationErrors),

    /// Another submission is still in flight; nothing was sent.
    AlreadySubmitting,

    /// The booking request was sent and answered.
    Settled(Settlement),
}

/// Point-in-time copy of the form state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Current field values
    pub draft: BookingDraft,

    /// Whether a submission is in flight; front ends disable the submit control while set.
    pub loading: bool,

    /// Outcome of the last settled submission
    pub status: Option<StatusMessage>,

    /// Field errors from the last submit attempt
    pub errors: ValidationErrors,

    /// Submission lifecycle
    pub phase: Phase,
}

#[derive(Debug, Default)]
struct FormState {
    draft: BookingDraft,
    loading: bool,
    status: Option<StatusMessage>,
    errors: ValidationErrors,
    phase: Phase,
}

/// Booking form controller.
pub struct BookingController<B> {
    backend: B,
    success_delay: Duration,
    state: Mutex<FormState>,
}

impl<B> fmt::Debug for BookingController<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingController")
            .field("success_delay", &self.success_delay)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<B: BookingBackend> BookingController<B> {
    /// Creates a controller with an empty draft.
    pub fn new(backend: B) -> Self {
        Self::with_draft(backend, BookingDraft::default())
    }

    /// Creates a controller around an existing draft.
    pub fn with_draft(backend: B, draft: BookingDraft) -> Self {
        Self {
            backend,
            success_delay: DEFAULT_SUCCESS_DELAY,
            state: Mutex::new(FormState {
                draft,
                ..FormState::default()
            }),
        }
    }

    /// Sets the pause before an accepted booking is reported. [`Duration::ZERO`] reports
    /// immediately.
    #[must_use]
    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    /// Overwrites a draft field with raw input. Nothing is validated until submit.
    pub fn update(&self, field: Field, value: impl Into<String>) {
        lock(&self.state).draft.set(field, value);
    }

    /// Copy of the current form state.
    pub fn snapshot(&self) -> FormSnapshot {
        let state = lock(&self.state);

        FormSnapshot {
            draft: state.draft.clone(),
            loading: state.loading,
            status: state.status.clone(),
            errors: state.errors.clone(),
            phase: state.phase,
        }
    }

    /// Confirmation payload describing the current draft.
    pub fn confirmation(&self) -> ConfirmationBooking {
        ConfirmationBooking::from(&lock(&self.state).draft)
    }

    /// Re-validates the draft, replacing the stored field errors. Returns whether it is valid.
    pub fn validate(&self) -> bool {
        let mut state = lock(&self.state);

        state.errors = validate(&state.draft);
        state.errors.is_empty()
    }

    /// Validates the draft and, when valid, sends it to the booking API.
    ///
    /// Validation runs under the form lock, so the form moves straight from idle (or settled) to
    /// [`Phase::Submitting`], or back to [`Phase::Idle`] with field errors when the draft is
    /// invalid. It then settles as [`Phase::Settled`].
    ///
    /// Failures are reported through the returned outcome and the form's status message; none
    /// are retried. The draft is left as entered after a successful booking.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = lock(&self.state);

            if state.phase == Phase::Submitting {
                debug!("submission already in flight");

                return SubmitOutcome::AlreadySubmitting;
            }

            match BookingRequest::from_draft(&state.draft) {
                Ok(request) => {
                    state.errors = ValidationErrors::default();
                    state.loading = true;
                    state.status = None;
                    state.phase = Phase::Submitting;

                    request
                }
                Err(errors) => {
                    debug!(invalid_fields = errors.len(), "booking draft failed validation");

                    state.errors = errors.clone();
                    state.phase = Phase::Idle;

                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        let in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let (status, settlement) = match self.backend.create_booking(&request).await {
            Ok(()) => {
                if !self.success_delay.is_zero() {
                    time::sleep(self.success_delay).await;
                }

                (StatusMessage::success(), Settlement::Success)
            }
            Err(BackendError::Rejected { status, reason }) => {
                warn!(status, reason = ?reason, "booking rejected");

                (StatusMessage::rejected(reason.as_deref()), Settlement::Failure)
            }
            Err(error) => {
                warn!(%error, "booking request failed");

                (StatusMessage::network_error(), Settlement::Failure)
            }
        };

        in_flight.settle(status, settlement);

        SubmitOutcome::Settled(settlement)
    }
}

/// Returns the form to [`Phase::Idle`] if a submission is abandoned before it settles.
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, status: StatusMessage, settlement: Settlement) {
        let mut state = lock(self.state);

        state.status = Some(status);
        state.loading = false;
        state.phase = Phase::Settled(settlement);

        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let mut state = lock(self.state);

        state.loading = false;
        state.phase = Phase::Idle;
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
