//! HTTP access to the spreadsheet-backed web app.
//!
//! Both clients share one `Api`: a reqwest client with a bounded timeout
//! plus the configured `Endpoint`. When the endpoint is unconfigured the
//! clients answer locally (demo data, simulated bookings) and never touch
//! the network.

mod booking;
mod events;

pub use booking::{BookingAcceptance, BookingClient};
pub use events::{EventsClient, FetchOptions};

use std::time::Duration;

use crate::endpoint::{ApiStatus, Endpoint};
use crate::error::{PinteError, PinteResult};

/// Shared HTTP plumbing for the events and booking clients
#[derive(Debug, Clone)]
pub struct Api {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl Api {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> PinteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PinteError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn status(&self) -> ApiStatus {
        ApiStatus::from(&self.endpoint)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Turn a non-2xx response into `RequestFailed`.
pub(crate) fn ensure_success(resp: reqwest::Response) -> PinteResult<reqwest::Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(PinteError::RequestFailed {
            status: status.as_u16(),
        });
    }
    Ok(resp)
}
