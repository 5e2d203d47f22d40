//! Headless page state.
//!
//! Each view owns its state and exposes one method per user action (a
//! filter click, a keystroke, a submit). The methods return plain render
//! models, so the host that draws them (terminal, browser) holds no state of
//! its own.

mod booking;
mod events;
mod page;

pub use booking::{
    BookingMessage, BookingState, BookingView, Key, MessageKind, SubmitBlocked, SubmitOutcome,
};
pub use events::{
    BookingNote, EventCard, EventDetails, EventsView, FilterControl, Listing, ListingState, Notice,
};
pub use page::Page;
