//! Display formatting for event timestamps.
//!
//! Timestamps are rendered in the site's time zone with fixed English
//! abbreviations and 24-hour times:
//! - single day: `Fri 14 Nov · 19:00 – 22:00` (end time only when it differs)
//! - several days: `Fri 26 Dec – Sun 28 Dec`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const DAY_FORMAT: &str = "%a %-d %b";
const TIME_FORMAT: &str = "%H:%M";

/// Naive timestamp shapes accepted in addition to RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Where an event sits relative to today, used for card badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    Past,
    Today,
    Upcoming,
}

/// Parse an ISO-8601 timestamp into an instant in `tz`.
///
/// Values without an offset (`2025-11-14T19:00`, `2025-11-14`) are read as
/// local time in `tz`; a bare date is midnight.
pub fn parse_instant(raw: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive).earliest()
}

/// Render the date line shown on cards and in the details surface.
///
/// Falls back to the raw `start` string when it cannot be parsed, and
/// ignores an `end` that cannot be parsed.
pub fn format_event_date_range(start: &str, end: Option<&str>, tz: Tz) -> String {
    let Some(start_dt) = parse_instant(start, tz) else {
        return start.to_string();
    };
    let end_dt = end.and_then(|e| parse_instant(e, tz));

    match end_dt {
        Some(end_dt) if end_dt.date_naive() != start_dt.date_naive() => format!(
            "{} – {}",
            start_dt.format(DAY_FORMAT),
            end_dt.format(DAY_FORMAT)
        ),
        Some(end_dt) if end_dt.time() != start_dt.time() => format!(
            "{} · {} – {}",
            start_dt.format(DAY_FORMAT),
            start_dt.format(TIME_FORMAT),
            end_dt.format(TIME_FORMAT)
        ),
        _ => format!(
            "{} · {}",
            start_dt.format(DAY_FORMAT),
            start_dt.format(TIME_FORMAT)
        ),
    }
}

/// Today's calendar date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Classify an event start against `today` by calendar day in `tz`.
pub fn classify(start: &str, today: NaiveDate, tz: Tz) -> Option<EventTiming> {
    let day = parse_instant(start, tz)?.date_naive();
    Some(match day.cmp(&today) {
        std::cmp::Ordering::Less => EventTiming::Past,
        std::cmp::Ordering::Equal => EventTiming::Today,
        std::cmp::Ordering::Greater => EventTiming::Upcoming,
    })
}
