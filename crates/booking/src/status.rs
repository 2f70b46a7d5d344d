//! Status messages shown under the booking form once a submission settles.

use std::fmt;

use serde::Serialize;

const SUCCESS_TEXT: &str = "Booking & Payment Successful!";
const REJECTED_FALLBACK: &str = "Something went wrong.";
const NETWORK_TEXT: &str = "⚠️ Network Error. Try Again!";

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// The booking went through.
    Success,

    /// The booking did not go through.
    Failure,
}

/// User-visible outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    tone: Tone,
    text: String,
}

impl StatusMessage {
    /// The booking was accepted.
    pub fn success() -> Self {
        Self {
            tone: Tone::Success,
            text: SUCCESS_TEXT.to_string(),
        }
    }

    /// The booking API refused the booking, optionally saying why.
    pub fn rejected(reason: Option<&str>) -> Self {
        Self {
            tone: Tone::Failure,
            text: format!("❌ Booking Failed: {}", reason.unwrap_or(REJECTED_FALLBACK)),
        }
    }

    /// The booking API could not be reached.
    pub fn network_error() -> Self {
        Self {
            tone: Tone::Failure,
            text: NETWORK_TEXT.to_string(),
        }
    }

    /// Presentation tone
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this reports a successful booking.
    pub fn is_success(&self) -> bool {
        self.tone == Tone::Success
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
