//! The events listing: filter buttons, search box, card grid and the
//! details surface.

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{error, info};

use crate::client::{EventsClient, FetchOptions};
use crate::date_format::{EventTiming, classify, format_event_date_range};
use crate::event::Event;
use crate::filter::{ALL_CATEGORIES, FilterState};
use crate::normalize::{normalise_category, sort_events};

pub const EMPTY_MESSAGE: &str = "No events match your search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    Loaded,
}

/// What the events grid currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Loading,
    Empty { message: &'static str },
    Grid(Vec<EventCard>),
}

impl Listing {
    pub fn cards(&self) -> &[EventCard] {
        match self {
            Listing::Grid(cards) => cards,
            _ => &[],
        }
    }
}

/// Non-blocking banner shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DemoMode,
    LoadFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::DemoMode => "Demo mode: no events endpoint is configured, showing sample events.",
            Notice::LoadFailed => "Events could not be loaded right now. Please try again later.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date_label: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// `None` when the start could not be parsed
    pub timing: Option<EventTiming>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub id: String,
    pub title: String,
    pub date_label: String,
    pub description: String,
    /// Ticket link; hidden when `None`
    pub ticket_url: Option<String>,
    pub booking_note: BookingNote,
}

/// Note handed to the booking form when booking from an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingNote(pub String);

impl BookingNote {
    pub fn for_event(event: &Event) -> Self {
        BookingNote(event.booking_note())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// `"all"` or a normalised category
    pub key: String,
    pub label: String,
    pub active: bool,
}

pub struct EventsView {
    tz: Tz,
    today: NaiveDate,
    state: ListingState,
    events: Vec<Event>,
    filtered: Vec<Event>,
    filter: FilterState,
    controls: Vec<FilterControl>,
    notice: Option<Notice>,
    details: Option<EventDetails>,
}

impl EventsView {
    /// `today` decides which cards are marked past or today.
    pub fn new(tz: Tz, today: NaiveDate) -> Self {
        EventsView {
            tz,
            today,
            state: ListingState::Loading,
            events: Vec::new(),
            filtered: Vec::new(),
            filter: FilterState::default(),
            controls: vec![all_control(true)],
            notice: None,
            details: None,
        }
    }

    /// Fetch, sort and show every event. Failures are logged and end in an
    /// empty listing with a notice; nothing is returned to the caller.
    pub async fn load(&mut self, client: &EventsClient) -> Listing {
        self.load_with(client, &FetchOptions::default()).await
    }

    /// `load`, bounded by `options`.
    pub async fn load_with(&mut self, client: &EventsClient, options: &FetchOptions) -> Listing {
        self.state = ListingState::Loading;
        self.notice = None;

        match client.fetch_events(options).await {
            Ok(events) => {
                if !client.api().endpoint().is_configured() {
                    self.notice = Some(Notice::DemoMode);
                }
                info!(count = events.len(), "Loaded events");
                self.set_events(events);
            }
            Err(e) => {
                error!("Failed to load events: {e}");
                self.notice = Some(Notice::LoadFailed);
                self.set_events(Vec::new());
            }
        }

        self.listing()
    }

    /// Replace the loaded events; filters are kept and reapplied.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = sort_events(&events, self.tz);
        self.state = ListingState::Loaded;
        self.details = None;
        self.rebuild_controls();
        self.recompute();
    }

    /// Click on the filter button at `index`. Out-of-range clicks are ignored.
    pub fn select_control(&mut self, index: usize) -> Listing {
        if let Some(control) = self.controls.get(index) {
            let key = control.key.clone();
            self.select_category(&key);
        }
        self.listing()
    }

    /// Activate a category filter by key ("all" or any category label).
    ///
    /// A key with no matching button is still applied; it matches nothing and
    /// leaves every button inactive.
    pub fn select_category(&mut self, key: &str) -> Listing {
        self.filter.set_category(key);
        self.mark_active_control();
        self.recompute();
        self.listing()
    }

    /// Search box input changed.
    pub fn search(&mut self, input: &str) -> Listing {
        self.filter.set_search(input);
        self.recompute();
        self.listing()
    }

    /// Back to "all" with an empty search box.
    pub fn reset(&mut self) -> Listing {
        self.filter.reset();
        self.mark_active_control();
        self.recompute();
        self.listing()
    }

    pub fn listing(&self) -> Listing {
        if self.state == ListingState::Loading {
            return Listing::Loading;
        }
        if self.filtered.is_empty() {
            return Listing::Empty {
                message: EMPTY_MESSAGE,
            };
        }
        Listing::Grid(self.filtered.iter().map(|e| self.card(e)).collect())
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Populate and show the details surface for event `id`.
    pub fn open_details(&mut self, id: &str) -> Option<&EventDetails> {
        let event = self.find(id)?;
        let details = EventDetails {
            id: event.id.clone(),
            title: event.title.clone(),
            date_label: format_event_date_range(&event.start, event.end.as_deref(), self.tz),
            description: event.description.clone().unwrap_or_default(),
            ticket_url: event.ticket_url.clone(),
            booking_note: BookingNote::for_event(event),
        };
        self.details = Some(details);
        self.details.as_ref()
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn details(&self) -> Option<&EventDetails> {
        self.details.as_ref()
    }

    /// "Book a table" on a card.
    pub fn book_from_card(&self, id: &str) -> Option<BookingNote> {
        self.find(id).map(BookingNote::for_event)
    }

    /// "Book a table" in the details surface; closes the surface.
    pub fn book_from_details(&mut self) -> Option<BookingNote> {
        self.details.take().map(|d| d.booking_note)
    }

    /// The next `count` events that have not happened yet.
    pub fn upcoming(&self, count: usize) -> Vec<EventCard> {
        self.events
            .iter()
            .map(|e| self.card(e))
            .filter(|card| card.timing != Some(EventTiming::Past))
            .take(count)
            .collect()
    }

    fn card(&self, event: &Event) -> EventCard {
        EventCard {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            date_label: format_event_date_range(&event.start, event.end.as_deref(), self.tz),
            description: event.description.clone(),
            image: event.image.clone(),
            timing: classify(&event.start, self.today, self.tz),
        }
    }

    fn recompute(&mut self) {
        self.filtered = self.filter.apply(&self.events);
    }

    /// One button for "all" plus one per distinct category, first-seen order.
    fn rebuild_controls(&mut self) {
        let mut controls = vec![all_control(false)];
        for event in &self.events {
            let key = normalise_category(&event.category);
            if key.is_empty() || controls.iter().any(|c| c.key == key) {
                continue;
            }
            controls.push(FilterControl {
                key,
                label: event.category.clone(),
                active: false,
            });
        }
        self.controls = controls;
        self.mark_active_control();
    }

    fn mark_active_control(&mut self) {
        let active = self.filter.active_category().to_string();
        for control in &mut self.controls {
            control.active = control.key == active;
        }
    }
}

fn all_control(active: bool) -> FilterControl {
    FilterControl {
        key: ALL_CATEGORIES.to_string(),
        label: "All".to_string(),
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Api;
    use crate::demo::{demo_anchor, demo_events};
    use crate::endpoint::Endpoint;
    use crate::test_support::{event, serve};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::time::Duration;

    const ZURICH: Tz = chrono_tz::Europe::Zurich;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    fn loaded(events: Vec<Event>) -> EventsView {
        let mut view = EventsView::new(ZURICH, today());
        view.set_events(events);
        view
    }

    fn sample() -> Vec<Event> {
        let mut quiz = event("quiz", "Quiz", "2025-11-12T20:00:00+01:00");
        quiz.title = "Pub Quiz".into();
        quiz.description = Some("Teams of up to six".into());

        let mut gig = event("gig", "Live Music", "2025-11-11T19:00:00+01:00");
        gig.title = "Akustik-Session".into();
        gig.description = Some("Unplugged evening".into());
        gig.end = Some("2025-11-11T22:00:00+01:00".into());
        gig.ticket_url = Some("https://tickets.example/gig".into());

        let mut band = event("band", "live-music", "2025-11-09T21:00:00+01:00");
        band.title = "Groove-Nacht".into();

        vec![quiz, gig, band]
    }

    fn ids(listing: &Listing) -> Vec<&str> {
        listing.cards().iter().map(|c| c.id.as_str()).collect()
    }

    fn client(endpoint: Endpoint) -> EventsClient {
        EventsClient::new(Api::new(endpoint, Duration::from_secs(5)).unwrap(), ZURICH)
    }

    #[test]
    fn starts_loading() {
        let view = EventsView::new(ZURICH, today());
        assert_eq!(view.listing(), Listing::Loading);
        assert_eq!(view.state(), ListingState::Loading);
    }

    #[test]
    fn loaded_events_render_sorted() {
        let view = loaded(sample());
        assert_eq!(ids(&view.listing()), ["band", "gig", "quiz"]);
    }

    #[test]
    fn cards_carry_formatted_dates_and_timing() {
        let view = loaded(sample());
        let listing = view.listing();
        let cards = listing.cards();

        assert_eq!(cards[0].timing, Some(EventTiming::Past));
        assert_eq!(cards[1].date_label, "Tue 11 Nov · 19:00 – 22:00");
        assert_eq!(cards[1].timing, Some(EventTiming::Upcoming));
    }

    #[test]
    fn category_filter_and_all() {
        let mut view = loaded(sample());

        let listing = view.select_category("livemusic");
        assert_eq!(ids(&listing), ["band", "gig"]);

        let listing = view.select_category("all");
        assert_eq!(ids(&listing), ["band", "gig", "quiz"]);
    }

    #[test]
    fn exactly_one_control_active() {
        let mut view = loaded(sample());
        let labels: Vec<_> = view.controls().iter().map(|c| c.label.as_str()).collect();
        // "live-music" and "Live Music" share one button, labelled as first seen
        assert_eq!(labels, ["All", "live-music", "Quiz"]);
        assert!(view.controls()[0].active);

        view.select_control(2);
        let active: Vec<_> = view.controls().iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, "quiz");
        assert_eq!(ids(&view.listing()), ["quiz"]);

        // ignored
        view.select_control(42);
        assert_eq!(ids(&view.listing()), ["quiz"]);
    }

    #[test]
    fn search_uses_active_category() {
        let mut view = loaded(sample());
        assert_eq!(ids(&view.search("UNPLUGGED")), ["gig"]);

        view.select_category("quiz");
        assert_eq!(view.listing(), Listing::Empty { message: EMPTY_MESSAGE });

        view.search("");
        assert_eq!(ids(&view.listing()), ["quiz"]);
    }

    #[test]
    fn reset_restores_everything() {
        let mut view = loaded(sample());
        view.select_category("quiz");
        view.search("teams");

        let listing = view.reset();
        assert_eq!(ids(&listing), ["band", "gig", "quiz"]);
        assert_eq!(view.filter(), &FilterState::default());
        assert!(view.controls()[0].active);
        assert_eq!(view.controls().iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn unknown_category_shows_empty_state() {
        let mut view = loaded(sample());
        let listing = view.select_category("Karaoke");
        assert_eq!(listing, Listing::Empty { message: EMPTY_MESSAGE });
        assert!(view.controls().iter().all(|c| !c.active));
    }

    #[test]
    fn details_with_and_without_ticket() {
        let mut view = loaded(sample());

        let details = view.open_details("gig").unwrap();
        assert_eq!(details.title, "Akustik-Session");
        assert_eq!(details.date_label, "Tue 11 Nov · 19:00 – 22:00");
        assert_eq!(details.description, "Unplugged evening");
        assert_eq!(details.ticket_url.as_deref(), Some("https://tickets.example/gig"));

        let details = view.open_details("band").unwrap();
        assert_eq!(details.ticket_url, None);
        assert_eq!(details.description, "");

        assert!(view.open_details("nope").is_none());
        // a miss leaves the previous surface alone
        assert_eq!(view.details().unwrap().id, "band");
    }

    #[test]
    fn booking_from_card_and_details() {
        let mut view = loaded(sample());
        assert_eq!(
            view.book_from_card("quiz"),
            Some(BookingNote("Table for event: Pub Quiz".into()))
        );
        assert_eq!(view.book_from_card("nope"), None);

        view.open_details("gig");
        let note = view.book_from_details().unwrap();
        assert_eq!(note.as_str(), "Table for event: Akustik-Session");
        assert!(view.details().is_none());
        assert_eq!(view.book_from_details(), None);
    }

    #[test]
    fn upcoming_skips_past_events() {
        let view = loaded(sample());
        let ids: Vec<_> = view.upcoming(5).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["gig", "quiz"]);
        assert_eq!(view.upcoming(1).len(), 1);
    }

    #[tokio::test]
    async fn load_in_demo_mode_shows_demo_events() {
        let mut view = EventsView::new(ZURICH, demo_anchor().date());
        let listing = view.load(&client(Endpoint::Unconfigured)).await;

        assert_eq!(listing.cards().len(), demo_events(ZURICH).len());
        assert_eq!(view.notice(), Some(Notice::DemoMode));
        assert_eq!(view.controls().len(), 5);
    }

    #[tokio::test]
    async fn load_from_endpoint_sorts() {
        let router = Router::new().route(
            "/events",
            get(|| async {
                Json(json!({"events": [
                    {"id": "b", "title": "B", "category": "Quiz", "start": "2025-01-02"},
                    {"id": "a", "title": "A", "category": "Quiz", "start": "2025-01-01"}
                ]}))
            }),
        );
        let base = serve(router).await;
        let endpoint = Endpoint::from_setting(Some(&base)).unwrap();

        let mut view = EventsView::new(ZURICH, today());
        let listing = view.load(&client(endpoint)).await;
        assert_eq!(ids(&listing), ["a", "b"]);
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn load_failure_degrades_to_empty_listing() {
        let router = Router::new().route(
            "/events",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let endpoint = Endpoint::from_setting(Some(&base)).unwrap();

        let mut view = EventsView::new(ZURICH, today());
        let listing = view.load(&client(endpoint)).await;

        assert_eq!(listing, Listing::Empty { message: EMPTY_MESSAGE });
        assert_eq!(view.state(), ListingState::Loaded);
        assert_eq!(view.notice(), Some(Notice::LoadFailed));
    }
}
