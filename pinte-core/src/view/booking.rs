//! The table booking modal.
//!
//! Lifecycle: `Closed → Open → Submitting → Open`, and from `Open` back to
//! `Closed` on close, escape, backdrop click or after a successful send has
//! been shown for a moment.

use std::time::Duration;

use tracing::{error, info};

use crate::booking_form::{BookingForm, BookingRequest, Field, FieldError};
use crate::client::{BookingAcceptance, BookingClient};
use crate::error::PinteResult;

pub const SENDING_MESSAGE: &str = "Sending your booking…";
pub const CONFIRMED_MESSAGE: &str = "Thanks! We will confirm by email shortly.";
pub const RECEIVED_MESSAGE: &str = "Request sent. We will be in touch.";
pub const DEMO_SUFFIX: &str = " (Demo mode)";

const SUBMIT_LABEL: &str = "Send request";
const SUBMITTING_LABEL: &str = "Sending…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Status,
    Success,
    Error,
}

/// Inline status line under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl BookingMessage {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        BookingMessage {
            kind,
            text: text.into(),
        }
    }
}

/// Why a submit click did not send anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Modal closed, or a request is already in flight
    NotOpen,
    Invalid(Vec<FieldError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    /// Sent and accepted; the modal has closed again. Carries the control
    /// that had focus before the modal opened.
    Accepted {
        acceptance: BookingAcceptance,
        restored_focus: Option<String>,
    },
    /// Not sent; the modal stays open with the form intact.
    Failed,
}

pub struct BookingView {
    state: BookingState,
    form: BookingForm,
    message: Option<BookingMessage>,
    submit_enabled: bool,
    last_focused: Option<String>,
    contact_email: String,
    success_close_delay: Duration,
    demo_close_delay: Duration,
}

impl BookingView {
    pub fn new(
        contact_email: impl Into<String>,
        success_close_delay: Duration,
        demo_close_delay: Duration,
    ) -> Self {
        BookingView {
            state: BookingState::Closed,
            form: BookingForm::default(),
            message: None,
            submit_enabled: true,
            last_focused: None,
            contact_email: contact_email.into(),
            success_close_delay,
            demo_close_delay,
        }
    }

    /// Show the modal with `prefill_note` in the notes field.
    ///
    /// `previously_focused` is handed back by `close`. Returns `false` while a
    /// request is in flight.
    pub fn open(&mut self, prefill_note: Option<&str>, previously_focused: Option<String>) -> bool {
        if self.state == BookingState::Submitting {
            return false;
        }
        if self.state == BookingState::Closed {
            self.last_focused = previously_focused;
        }
        self.state = BookingState::Open;
        self.form.notes = prefill_note.unwrap_or_default().to_string();
        self.message = None;
        true
    }

    /// Hide the modal and clear it. Returns the control to refocus.
    pub fn close(&mut self) -> Option<String> {
        if self.state != BookingState::Open {
            return None;
        }
        self.state = BookingState::Closed;
        self.form.reset();
        self.message = None;
        self.last_focused.take()
    }

    /// Escape closes an open modal; ignored while submitting.
    pub fn handle_key(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Escape => self.close(),
            Key::Other => None,
        }
    }

    pub fn backdrop_click(&mut self) -> Option<String> {
        self.close()
    }

    /// Type into a form input. Ignored unless the modal is open.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        if self.state == BookingState::Open {
            self.form.set(field, value);
        }
    }

    /// Validate the form and move to `Submitting`, returning the request to
    /// send. Invalid forms stay open untouched.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, SubmitBlocked> {
        if self.state != BookingState::Open {
            return Err(SubmitBlocked::NotOpen);
        }
        self.form.report_validity().map_err(SubmitBlocked::Invalid)?;

        self.state = BookingState::Submitting;
        self.submit_enabled = false;
        self.message = Some(BookingMessage::new(MessageKind::Status, SENDING_MESSAGE));
        Ok(self.form.to_request())
    }

    /// Record the endpoint's answer. Returns the acceptance on success.
    pub fn finish_submit(
        &mut self,
        result: PinteResult<BookingAcceptance>,
    ) -> Option<BookingAcceptance> {
        self.state = BookingState::Open;
        self.submit_enabled = true;

        match result {
            Ok(acceptance) => {
                info!(?acceptance, "Booking sent");
                let mut text = match acceptance {
                    BookingAcceptance::Received => RECEIVED_MESSAGE.to_string(),
                    BookingAcceptance::Confirmed | BookingAcceptance::Demo => {
                        CONFIRMED_MESSAGE.to_string()
                    }
                };
                if acceptance.is_demo() {
                    text.push_str(DEMO_SUFFIX);
                }
                self.message = Some(BookingMessage::new(MessageKind::Success, text));
                self.form.reset();
                Some(acceptance)
            }
            Err(e) => {
                error!("Booking failed: {e}");
                self.message = Some(BookingMessage::new(
                    MessageKind::Error,
                    format!(
                        "We could not send your booking. Please try again or email {}.",
                        self.contact_email
                    ),
                ));
                None
            }
        }
    }

    /// Full submit: validate, send, show the result and, on success, close
    /// after the message has been visible for a moment.
    pub async fn submit(&mut self, client: &BookingClient) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let result = client.submit_booking(&request).await;

        let Some(acceptance) = self.finish_submit(result) else {
            return SubmitOutcome::Failed;
        };

        tokio::time::sleep(self.close_delay(acceptance)).await;
        SubmitOutcome::Accepted {
            acceptance,
            restored_focus: self.close(),
        }
    }

    /// How long the success message stays up before the modal closes.
    pub fn close_delay(&self, acceptance: BookingAcceptance) -> Duration {
        if acceptance.is_demo() {
            self.demo_close_delay
        } else {
            self.success_close_delay
        }
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != BookingState::Closed
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn message(&self) -> Option<&BookingMessage> {
        self.message.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_enabled {
            SUBMIT_LABEL
        } else {
            SUBMITTING_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking_form::FieldProblem;
    use crate::client::Api;
    use crate::endpoint::Endpoint;
    use crate::error::PinteError;
    use crate::test_support::serve;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    fn view() -> BookingView {
        BookingView::new(
            "hello@pinte.amatt.ch",
            Duration::from_millis(3000),
            Duration::from_millis(2000),
        )
    }

    fn fill(view: &mut BookingView) {
        view.input(Field::Name, "Anna Muster");
        view.input(Field::Email, "anna@example.org");
        view.input(Field::Phone, "+41 79 000 00 00");
        view.input(Field::Date, "2025-11-14");
        view.input(Field::Time, "19:30");
        view.input(Field::PartySize, "4");
    }

    fn booking_client(endpoint: Endpoint) -> BookingClient {
        BookingClient::new(
            Api::new(endpoint, Duration::from_secs(5)).unwrap(),
            Duration::from_millis(400),
        )
    }

    #[test]
    fn open_prefills_note_and_close_restores_focus() {
        let mut view = view();
        assert!(view.open(Some("Table for event: Quiz"), Some("book-quiz".into())));
        assert_eq!(view.state(), BookingState::Open);
        assert_eq!(view.form().notes, "Table for event: Quiz");

        view.input(Field::Name, "Anna");
        assert_eq!(view.close().as_deref(), Some("book-quiz"));
        assert_eq!(view.state(), BookingState::Closed);
        assert_eq!(view.form(), &BookingForm::default());
        assert_eq!(view.close(), None);
    }

    #[test]
    fn reopening_keeps_original_focus_target() {
        let mut view = view();
        view.open(None, Some("first".into()));
        view.open(Some("note"), Some("second".into()));
        assert_eq!(view.form().notes, "note");
        assert_eq!(view.close().as_deref(), Some("first"));
    }

    #[test]
    fn escape_and_backdrop_close_when_open() {
        let mut view = view();
        view.open(None, Some("trigger".into()));
        assert_eq!(view.handle_key(Key::Other), None);
        assert!(view.is_open());
        assert_eq!(view.handle_key(Key::Escape).as_deref(), Some("trigger"));
        assert!(!view.is_open());

        view.open(None, None);
        view.backdrop_click();
        assert_eq!(view.state(), BookingState::Closed);
    }

    #[test]
    fn input_ignored_when_closed() {
        let mut view = view();
        view.input(Field::Name, "Anna");
        assert_eq!(view.form().name, "");
    }

    #[test]
    fn invalid_form_is_not_sent() {
        let mut view = view();
        view.open(None, None);
        view.input(Field::Name, "Anna");

        let Err(SubmitBlocked::Invalid(errors)) = view.begin_submit() else {
            panic!("expected validation errors");
        };
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].problem, FieldProblem::Missing);
        assert_eq!(view.state(), BookingState::Open);
        assert!(view.submit_enabled());
        assert_eq!(view.form().name, "Anna");
    }

    #[test]
    fn closed_modal_cannot_submit() {
        let mut view = view();
        assert_eq!(view.begin_submit(), Err(SubmitBlocked::NotOpen));
    }

    #[test]
    fn submitting_disables_button_and_blocks_close() {
        let mut view = view();
        view.open(Some("Table for event: Quiz"), Some("trigger".into()));
        fill(&mut view);

        let request = view.begin_submit().unwrap();
        assert_eq!(request.notes, "Table for event: Quiz");
        assert_eq!(view.state(), BookingState::Submitting);
        assert!(!view.submit_enabled());
        assert_eq!(view.submit_label(), "Sending…");
        assert_eq!(view.message().unwrap().text, SENDING_MESSAGE);

        // neither escape, backdrop, reopen nor a second submit interrupt it
        assert_eq!(view.handle_key(Key::Escape), None);
        assert_eq!(view.backdrop_click(), None);
        assert!(!view.open(None, None));
        assert_eq!(view.begin_submit(), Err(SubmitBlocked::NotOpen));
        assert_eq!(view.state(), BookingState::Submitting);
    }

    #[test]
    fn failure_keeps_form_and_names_contact() {
        let mut view = view();
        view.open(None, None);
        fill(&mut view);
        view.begin_submit().unwrap();

        let result = view.finish_submit(Err(PinteError::Network("dns".into())));
        assert_eq!(result, None);
        assert_eq!(view.state(), BookingState::Open);
        assert!(view.submit_enabled());
        assert_eq!(view.submit_label(), "Send request");

        let message = view.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert!(message.text.contains("hello@pinte.amatt.ch"));
        assert_eq!(view.form().name, "Anna Muster");
    }

    #[test]
    fn received_uses_softer_wording() {
        let mut view = view();
        view.open(None, None);
        fill(&mut view);
        view.begin_submit().unwrap();
        view.finish_submit(Ok(BookingAcceptance::Received));
        assert_eq!(view.message().unwrap().text, RECEIVED_MESSAGE);
    }

    #[tokio::test]
    async fn configured_success_clears_form() {
        let router = Router::new().route(
            "/booking",
            post(|| async { Json(json!({"status": "success"})) }),
        );
        let base = serve(router).await;
        let client = booking_client(Endpoint::from_setting(Some(&base)).unwrap());

        let mut view = view();
        view.open(Some("Table for event: Quiz"), Some("trigger".into()));
        fill(&mut view);

        let request = view.begin_submit().unwrap();
        let result = client.submit_booking(&request).await;
        assert_eq!(view.finish_submit(result), Some(BookingAcceptance::Confirmed));

        let message = view.message().unwrap();
        assert_eq!(message.text, CONFIRMED_MESSAGE);
        assert!(!message.text.contains(DEMO_SUFFIX));
        assert_eq!(view.form(), &BookingForm::default());
        assert!(view.submit_enabled());
        assert_eq!(view.close_delay(BookingAcceptance::Confirmed), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn demo_submit_is_tagged_and_closes_after_delay() {
        let client = booking_client(Endpoint::Unconfigured);
        let mut view = view();
        view.open(None, Some("trigger".into()));
        fill(&mut view);

        let started = tokio::time::Instant::now();
        let outcome = view.submit(&client).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                acceptance: BookingAcceptance::Demo,
                restored_focus: Some("trigger".into()),
            }
        );
        // 400 ms simulated latency + 2 s message display
        assert!(started.elapsed() >= Duration::from_millis(2400));
        assert_eq!(view.state(), BookingState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn demo_message_carries_suffix() {
        let client = booking_client(Endpoint::Unconfigured);
        let mut view = view();
        view.open(None, None);
        fill(&mut view);

        let request = view.begin_submit().unwrap();
        let result = client.submit_booking(&request).await;
        view.finish_submit(result);

        assert_eq!(
            view.message().unwrap().text,
            format!("{CONFIRMED_MESSAGE}{DEMO_SUFFIX}")
        );
    }

    #[tokio::test]
    async fn server_error_leaves_modal_open() {
        let router = Router::new().route(
            "/booking",
            post(|| async { StatusCode::BAD_GATEWAY }),
        );
        let base = serve(router).await;
        let client = booking_client(Endpoint::from_setting(Some(&base)).unwrap());

        let mut view = view();
        view.open(None, None);
        fill(&mut view);

        assert_eq!(view.submit(&client).await, SubmitOutcome::Failed);
        assert_eq!(view.state(), BookingState::Open);
        assert_eq!(view.message().unwrap().kind, MessageKind::Error);
        assert_eq!(view.form().party_size, "4");
    }

    #[tokio::test]
    async fn submit_reports_validation_block() {
        let client = booking_client(Endpoint::Unconfigured);
        let mut view = view();
        view.open(None, None);

        assert!(matches!(
            view.submit(&client).await,
            SubmitOutcome::Blocked(SubmitBlocked::Invalid(_))
        ));
    }
}
