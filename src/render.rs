//! Terminal rendering for the page views.
//!
//! Extension traits that draw pinte-core render models with owo_colors.

use owo_colors::OwoColorize;
use pinte_core::date_format::EventTiming;
use pinte_core::endpoint::ApiStatus;
use pinte_core::view::{
    BookingMessage, EventCard, EventDetails, FilterControl, Listing, MessageKind, Notice,
};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventCard {
    fn render(&self) -> String {
        let mut header = format!("{} {}", self.title.bold(), format!("#{}", self.id).dimmed());
        match self.timing {
            Some(EventTiming::Today) => header.push_str(&format!(" {}", "TODAY".yellow().bold())),
            Some(EventTiming::Past) => header.push_str(&format!(" {}", "PAST".dimmed())),
            _ => {}
        }

        let mut lines = vec![header];
        let mut meta = self.date_label.cyan().to_string();
        if !self.category.is_empty() {
            meta.push_str(&format!("  {}", self.category.to_uppercase().yellow()));
        }
        lines.push(format!("  {}", meta));

        if let Some(description) = &self.description {
            lines.push(format!("  {}", description));
        }

        lines.join("\n")
    }
}

impl Render for Listing {
    fn render(&self) -> String {
        match self {
            Listing::Loading => "Loading events…".dimmed().to_string(),
            Listing::Empty { message } => message.dimmed().to_string(),
            Listing::Grid(cards) => cards
                .iter()
                .map(Render::render)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

impl Render for EventDetails {
    fn render(&self) -> String {
        let mut lines = vec![
            self.title.bold().to_string(),
            self.date_label.cyan().to_string(),
        ];
        if !self.description.is_empty() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }
        if let Some(url) = &self.ticket_url {
            lines.push(String::new());
            lines.push(format!("Tickets: {}", url.underline()));
        }
        lines.push(String::new());
        lines.push(
            format!("Book a table: pinte book --event {} …", self.id)
                .dimmed()
                .to_string(),
        );
        lines.join("\n")
    }
}

impl Render for [FilterControl] {
    fn render(&self) -> String {
        self.iter()
            .map(|control| {
                if control.active {
                    format!("[{}]", control.label).green().bold().to_string()
                } else {
                    format!(" {} ", control.label).dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Render for Notice {
    fn render(&self) -> String {
        match self {
            Notice::DemoMode => self.message().yellow().to_string(),
            Notice::LoadFailed => self.message().red().to_string(),
        }
    }
}

impl Render for BookingMessage {
    fn render(&self) -> String {
        match self.kind {
            MessageKind::Status => self.text.dimmed().to_string(),
            MessageKind::Success => self.text.green().to_string(),
            MessageKind::Error => self.text.red().to_string(),
        }
    }
}

impl Render for ApiStatus {
    fn render(&self) -> String {
        match &self.base_url {
            Some(url) if self.configured => format!("{} {}", "Endpoint:".bold(), url),
            _ => format!(
                "{} {}",
                "Endpoint:".bold(),
                "not configured (demo mode)".yellow()
            ),
        }
    }
}
