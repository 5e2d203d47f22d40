//! `POST /booking`

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::{Api, ensure_success};
use crate::booking_form::BookingRequest;
use crate::error::PinteResult;

/// How the endpoint (or demo mode) answered a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAcceptance {
    /// `{"ok": true}` or `{"status": "success"}`
    Confirmed,
    /// 2xx without an explicit acceptance flag
    Received,
    /// No endpoint configured; simulated success
    Demo,
}

impl BookingAcceptance {
    pub fn is_demo(self) -> bool {
        self == BookingAcceptance::Demo
    }
}

#[derive(Debug, Clone)]
pub struct BookingClient {
    api: Api,
    demo_delay: Duration,
}

impl BookingClient {
    pub fn new(api: Api, demo_delay: Duration) -> Self {
        Self { api, demo_delay }
    }

    /// Send one booking request. Never retried.
    pub async fn submit_booking(&self, payload: &BookingRequest) -> PinteResult<BookingAcceptance> {
        let Some(url) = self.api.endpoint().url_for("/booking") else {
            warn!("No booking endpoint configured, simulating success");
            tokio::time::sleep(self.demo_delay).await;
            return Ok(BookingAcceptance::Demo);
        };

        debug!(%url, "Submitting booking");
        let resp = self.api.http().post(url).json(payload).send().await?;
        let resp = ensure_success(resp)?;

        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let body = resp.text().await?;

        let parsed: Option<Value> = if is_json {
            Some(serde_json::from_str(&body)?)
        } else {
            serde_json::from_str(&body).ok()
        };

        Ok(match parsed {
            Some(body) if is_accepted(&body) => BookingAcceptance::Confirmed,
            _ => BookingAcceptance::Received,
        })
    }
}

fn is_accepted(body: &Value) -> bool {
    body.get("ok").and_then(Value::as_bool) == Some(true)
        || body.get("status").and_then(Value::as_str) == Some("success")
}
