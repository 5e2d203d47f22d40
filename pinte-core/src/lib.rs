//! Core types for the Pinte website.
//!
//! This crate provides everything the event listing and table booking flows
//! need, independent of how they are drawn:
//! - `event` and the pure helpers in `normalize` and `date_format`
//! - `client` for the spreadsheet-backed remote endpoint (with demo fallback)
//! - `view` for the headless listing and booking state machines

pub mod booking_form;
pub mod client;
pub mod date_format;
pub mod demo;
pub mod endpoint;
pub mod error;
pub mod event;
pub mod filter;
pub mod normalize;
pub mod site_config;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export the event type at crate root for convenience
pub use event::Event;
