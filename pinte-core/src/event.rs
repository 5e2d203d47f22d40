//! Event listing types.
//!
//! Events come from the remote endpoint (or the demo generator) as JSON and
//! are held unchanged for the lifetime of a page view. Timestamps are kept
//! as the strings the endpoint sent; see `date_format::parse_instant` for how
//! they are read.

use serde::{Deserialize, Serialize};

/// A calendar item shown on the events page (gig, quiz night, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// ISO-8601 start timestamp
    pub start: String,
    /// ISO-8601 end timestamp, expected to be >= `start`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Image URL for the card thumbnail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
}

impl Event {
    /// The contextual note pre-filled into the booking form.
    pub fn booking_note(&self) -> String {
        format!("Table for event: {}", self.title)
    }

    /// Lowercased text the search box matches against.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Response body of `GET /events`.
///
/// The endpoint either wraps the list (`{"events": [...]}`) or returns a
/// bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EventsPayload {
    Wrapped { events: Vec<Event> },
    Bare(Vec<Event>),
}

impl EventsPayload {
    pub fn into_events(self) -> Vec<Event> {
        match self {
            EventsPayload::Wrapped { events } => events,
            EventsPayload::Bare(events) => events,
        }
    }
}
