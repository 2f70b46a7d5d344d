//! Booking API Config

use std::time::Duration;

use clap::Args;
use hotel_booking::backend::{DEFAULT_BOOKING_ENDPOINT, HttpBackendConfig};

/// Booking API connection settings.
#[derive(Debug, Args)]
pub(crate) struct BackendConfig {
    /// Booking creation endpoint
    #[arg(long, env = "BOOKING_ENDPOINT", default_value = DEFAULT_BOOKING_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, env = "BOOKING_TIMEOUT_SECONDS", default_value_t = 30u64)]
    pub timeout_seconds: u64,

    /// Pause before a successful booking is reported, in milliseconds
    #[arg(long, env = "BOOKING_SUCCESS_DELAY_MS", default_value_t = 1_000u64)]
    pub success_delay_ms: u64,
}

impl BackendConfig {
    /// HTTP client settings.
    pub(crate) fn http(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            endpoint: self.endpoint.clone(),
            timeout: (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds)),
        }
    }

    /// Pause before a successful booking is reported.
    pub(crate) fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}
