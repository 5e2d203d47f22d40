//! `GET /events`

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{debug, warn};
use url::Url;

use super::{Api, ensure_success};
use crate::demo::demo_events;
use crate::error::{PinteError, PinteResult};
use crate::event::{Event, EventsPayload};

/// Optional bounds for an events query. Unset fields are left out of the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub limit: Option<u32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl FetchOptions {
    pub fn limit(limit: u32) -> Self {
        FetchOptions {
            limit: Some(limit),
            ..Default::default()
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct EventsClient {
    api: Api,
    tz: Tz,
}

impl EventsClient {
    pub fn new(api: Api, tz: Tz) -> Self {
        Self { api, tz }
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// The request URL for `options`, or `None` in demo mode.
    pub fn events_url(&self, options: &FetchOptions) -> PinteResult<Option<Url>> {
        let Some(raw) = self.api.endpoint().url_for("/events") else {
            return Ok(None);
        };
        let mut url = Url::parse(&raw).map_err(|e| PinteError::InvalidUrl(e.to_string()))?;

        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(Some(url))
    }

    /// Fetch the event list. One request, no retry, no caching.
    ///
    /// In demo mode this returns the fixed demo dataset regardless of
    /// `options`.
    pub async fn fetch_events(&self, options: &FetchOptions) -> PinteResult<Vec<Event>> {
        let Some(url) = self.events_url(options)? else {
            warn!("No events endpoint configured, serving demo data");
            return Ok(demo_events(self.tz));
        };

        debug!(%url, "Fetching events");
        let resp = self.api.http().get(url).send().await?;
        let body = ensure_success(resp)?.text().await?;

        let payload: EventsPayload = serde_json::from_str(&body)?;
        let events = payload.into_events();
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    /// The next few events, as shown in the teaser strip.
    pub async fn fetch_next_events(&self, limit: u32) -> PinteResult<Vec<Event>> {
        self.fetch_events(&FetchOptions::limit(limit)).await
    }
}
