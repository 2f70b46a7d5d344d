//! Booking API client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::request::BookingRequest;

/// Booking endpoint of a locally running hotel API.
pub const DEFAULT_BOOKING_ENDPOINT: &str = "http://localhost:8000/api/booking/";

/// Errors returned when creating a booking.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The booking API answered with a non-2xx status.
    #[error("booking rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,

        /// The `error` text of the response body, when present and non-empty.
        reason: Option<String>,
    },

    /// The request could not be sent or no response arrived.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx response carried a body that is not a JSON object.
    #[error("unreadable response body for status {status}")]
    MalformedResponse {
        /// HTTP status code
        status: u16,

        /// Body decoding error
        #[source]
        source: serde_json::Error,
    },
}

#[automock]
#[async_trait]
/// Creates bookings on the hotel API.
pub trait BookingBackend: Send + Sync {
    /// Sends a single booking creation request. Never retries.
    async fn create_booking(&self, request: &BookingRequest) -> Result<(), BackendError>;
}

/// Connection settings for [`HttpBookingBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Booking creation URL, e.g. `"http://localhost:8000/api/booking/"`.
    pub endpoint: String,

    /// Overall request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BOOKING_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// JSON-over-HTTP booking client.
#[derive(Debug, Clone)]
pub struct HttpBookingBackend {
    endpoint: String,
    http: Client,
}

impl HttpBookingBackend {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the HTTP client cannot be initialised.
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: config.endpoint,
            http: builder.build()?,
        })
    }

    /// Booking creation URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingBackend for HttpBookingBackend {
    async fn create_booking(&self, request: &BookingRequest) -> Result<(), BackendError> {
        debug!(
            endpoint = %self.endpoint,
            room = request.room(),
            rooms = request.rooms(),
            "posting booking"
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            if let Ok(accepted) = response.json::<AcceptedBody>().await {
                debug!(%status, message = ?accepted.message, "booking accepted");
            }

            return Ok(());
        }

        let bytes = response.bytes().await?;
        let body: Map<String, Value> =
            serde_json::from_slice(&bytes).map_err(|source| BackendError::MalformedResponse {
                status: status.as_u16(),
                source,
            })?;

        Err(BackendError::Rejected {
            status: status.as_u16(),
            reason: body
                .get("error")
                .and_then(Value::as_str)
                .filter(|reason| !reason.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AcceptedBody {
    #[serde(default)]
    message: Option<String>,
}
