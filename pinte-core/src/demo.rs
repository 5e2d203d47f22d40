//! Static demo dataset, served when no endpoint is configured or the
//! listing needs a stand-in.

use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::event::Event;

const CATEGORIES: &[&str] = &["Live Music", "Quiz", "Special", "Club Night"];
const TITLES: &[&str] = &[
    "Groove-Nacht",
    "Trivia-Herausforderung",
    "Burger-Börse",
    "Hausparty",
    "Akustik-Session",
    "80er-Rewind",
    "Salsa-Nacht",
    "Comedy Open Mic",
];
const LOCATIONS: &[&str] = &["Main bar", "Cellar", "Garden"];

const PAST_EVENTS: i64 = 7;
const UPCOMING_EVENTS: i64 = 30;

/// Reference "today" the demo dataset is laid out around.
pub fn demo_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 10)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

/// The fixed demo dataset: 7 past events every third day before the anchor
/// and one event per evening for the 30 days from the anchor on.
pub fn demo_events(tz: Tz) -> Vec<Event> {
    demo_events_from(demo_anchor(), tz)
}

pub fn demo_events_from(anchor: NaiveDateTime, tz: Tz) -> Vec<Event> {
    let mut events = Vec::new();
    let day = anchor.date();

    for i in (1..=PAST_EVENTS).rev() {
        let Some(start) = (day - Duration::days(i * 3)).and_hms_opt(19, 0, 0) else {
            continue;
        };
        let category = CATEGORIES[i as usize % CATEGORIES.len()];
        events.push(Event {
            id: (PAST_EVENTS + 1 - i).to_string(),
            title: TITLES[i as usize % TITLES.len()].to_string(),
            category: category.to_string(),
            start: to_rfc3339(start, tz),
            end: None,
            description: Some("This event has already taken place. Have a look at the photos!".into()),
            location: Some(LOCATIONS[i as usize % LOCATIONS.len()].to_string()),
            image: Some(placeholder_image(category, "52525b/a1a1aa")),
            ticket_url: None,
        });
    }

    for i in 0..UPCOMING_EVENTS {
        let hour = 19 + (i % 5) as u32;
        let minute = (i % 2) as u32 * 30;
        let Some(start) = (day + Duration::days(i)).and_hms_opt(hour, minute, 0) else {
            continue;
        };
        let end = start + Duration::hours(3);
        let category = if i == 0 {
            "Live Music"
        } else {
            CATEGORIES[i as usize % CATEGORIES.len()]
        };
        let id = (i + PAST_EVENTS + 1).to_string();

        events.push(Event {
            ticket_url: (category == "Live Music")
                .then(|| format!("https://pinte.amatt.ch/tickets/{id}")),
            id,
            title: TITLES[i as usize % TITLES.len()].to_string(),
            category: category.to_string(),
            start: to_rfc3339(start, tz),
            end: Some(to_rfc3339(end, tz)),
            description: Some(
                "Get ready for a great night out. Save your spot now!".into(),
            ),
            location: Some(LOCATIONS[i as usize % LOCATIONS.len()].to_string()),
            image: Some(placeholder_image(category, "334155/EAB308")),
        });
    }

    events
}

fn to_rfc3339(local: NaiveDateTime, tz: Tz) -> String {
    match tz.from_local_datetime(&local).earliest() {
        Some(dt) => dt.to_rfc3339(),
        // Inside a DST gap: fall back to the naive form, still parseable
        None => local.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

fn placeholder_image(category: &str, colors: &str) -> String {
    format!(
        "https://placehold.co/600x400/{colors}?text={}",
        category.replace(' ', "+")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_format::{EventTiming, classify, parse_instant};
    use crate::normalize::sort_events;
    use std::collections::HashSet;

    const ZURICH: Tz = chrono_tz::Europe::Zurich;

    #[test]
    fn has_past_and_upcoming_events() {
        let events = demo_events(ZURICH);
        assert_eq!(events.len(), 37);

        let today = demo_anchor().date();
        let past = events
            .iter()
            .filter(|e| classify(&e.start, today, ZURICH) == Some(EventTiming::Past))
            .count();
        assert_eq!(past, 7);
    }

    #[test]
    fn ids_are_unique() {
        let events = demo_events(ZURICH);
        let ids: HashSet<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn every_start_parses_and_ends_follow_starts() {
        for event in demo_events(ZURICH) {
            let start = parse_instant(&event.start, ZURICH).unwrap();
            if let Some(end) = &event.end {
                assert!(parse_instant(end, ZURICH).unwrap() >= start);
            }
        }
    }

    #[test]
    fn already_in_chronological_order() {
        let events = demo_events(ZURICH);
        assert_eq!(sort_events(&events, ZURICH), events);
    }

    #[test]
    fn first_upcoming_event_is_live_music_with_tickets() {
        let events = demo_events(ZURICH);
        let first = &events[7];
        assert_eq!(first.category, "Live Music");
        assert!(first.ticket_url.is_some());
        assert!(events[8].ticket_url.is_none());
    }
}
