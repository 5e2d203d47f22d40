//! One page view: both views plus the clients they talk through, built
//! once from the site config.

use chrono::NaiveDate;
use tracing::error;

use super::booking::{BookingView, SubmitOutcome};
use super::events::{EventCard, EventsView, Listing};
use crate::client::{Api, BookingClient, EventsClient, FetchOptions};
use crate::date_format::today_in;
use crate::endpoint::ApiStatus;
use crate::error::PinteResult;
use crate::site_config::SiteConfig;

pub struct Page {
    pub events: EventsView,
    pub booking: BookingView,
    events_client: EventsClient,
    booking_client: BookingClient,
    teaser_count: usize,
}

impl Page {
    pub fn new(config: &SiteConfig) -> PinteResult<Self> {
        let tz = config.tz()?;
        Self::with_today(config, today_in(tz))
    }

    /// Like `new`, with an explicit "today" for past/today badges.
    pub fn with_today(config: &SiteConfig, today: NaiveDate) -> PinteResult<Self> {
        let tz = config.tz()?;
        let api = Api::new(config.endpoint()?, config.request_timeout())?;

        Ok(Page {
            events: EventsView::new(tz, today),
            booking: BookingView::new(
                config.contact_email.clone(),
                config.success_close_delay(),
                config.demo_close_delay(),
            ),
            events_client: EventsClient::new(api.clone(), tz),
            booking_client: BookingClient::new(api, config.demo_delay()),
            teaser_count: config.teaser_count,
        })
    }

    /// Load the listing. Never fails: errors end in an empty listing.
    pub async fn init(&mut self) -> Listing {
        self.events.load(&self.events_client).await
    }

    /// `init`, with the listing bounded by `options`.
    pub async fn init_with(&mut self, options: &FetchOptions) -> Listing {
        self.events.load_with(&self.events_client, options).await
    }

    /// Open the booking modal from a card's "Book a table" button.
    pub fn book_event(&mut self, id: &str, focused: Option<String>) -> bool {
        match self.events.book_from_card(id) {
            Some(note) => self.booking.open(Some(note.as_str()), focused),
            None => false,
        }
    }

    /// Open the booking modal from the details surface.
    pub fn book_from_details(&mut self, focused: Option<String>) -> bool {
        match self.events.book_from_details() {
            Some(note) => self.booking.open(Some(note.as_str()), focused),
            None => false,
        }
    }

    /// Open the booking modal without any event context.
    pub fn book_table(&mut self, focused: Option<String>) -> bool {
        self.booking.open(None, focused)
    }

    pub async fn submit_booking(&mut self) -> SubmitOutcome {
        self.booking.submit(&self.booking_client).await
    }

    /// The next few upcoming events for the teaser strip.
    ///
    /// Fetched separately from the listing, with the endpoint's `limit`.
    /// Failures give an empty strip.
    pub async fn teasers(&self) -> Vec<EventCard> {
        let limit = u32::try_from(self.teaser_count).unwrap_or(u32::MAX);
        match self.events_client.fetch_next_events(limit).await {
            Ok(events) => {
                let tz = self.events.tz();
                let mut strip = EventsView::new(tz, self.events.today());
                strip.set_events(events);
                strip.upcoming(self.teaser_count)
            }
            Err(e) => {
                error!("Failed to load teaser events: {e}");
                Vec::new()
            }
        }
    }

    /// For hosts that drive `begin_submit`/`finish_submit` themselves.
    pub fn booking_client(&self) -> &BookingClient {
        &self.booking_client
    }

    pub fn api_status(&self) -> ApiStatus {
        self.events_client.api().status()
    }
}
