//! Category normalisation and chronological ordering of events.

use chrono_tz::Tz;

use crate::date_format::parse_instant;
use crate::event::Event;

/// Canonical form of a category label for equality checks.
///
/// Lowercases and drops everything outside `[a-z0-9]`, so "Live Music",
/// "live-music" and "LIVE_MUSIC" all become `livemusic`.
pub fn normalise_category(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Return a copy of `events` sorted ascending by start instant.
///
/// The sort is stable. Events whose start cannot be parsed go last, in the
/// order they arrived.
pub fn sort_events(events: &[Event], tz: Tz) -> Vec<Event> {
    let mut keyed: Vec<_> = events
        .iter()
        .map(|event| (parse_instant(&event.start, tz), event))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    keyed.into_iter().map(|(_, event)| event.clone()).collect()
}
