use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use pinte_core::booking_form::Field;
use pinte_core::site_config::SiteConfig;
use pinte_core::view::{Page, SubmitBlocked};

use crate::render::Render;
use crate::utils::tui;

pub struct BookArgs {
    pub event: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub notes: Option<String>,
}

pub async fn run(config: &SiteConfig, args: BookArgs) -> Result<()> {
    let mut page = match &args.event {
        Some(_) => super::loaded_page(config).await?,
        None => Page::new(config)?,
    };

    let opened = match &args.event {
        Some(id) => page.book_event(id, None),
        None => page.book_table(None),
    };
    if !opened {
        match &args.event {
            Some(id) => bail!("No event with id '{}'", id),
            None => bail!("Booking form could not be opened"),
        }
    }

    page.booking.input(Field::Name, args.name);
    page.booking.input(Field::Email, args.email);
    page.booking.input(Field::Phone, args.phone);
    page.booking.input(Field::Date, args.date);
    page.booking.input(Field::Time, args.time);
    page.booking.input(Field::PartySize, args.guests);
    if let Some(notes) = args.notes {
        page.booking.input(Field::Notes, notes);
    }

    // The terminal has no modal to keep up, so skip the close delay and
    // print the result message straight away.
    let request = match page.booking.begin_submit() {
        Ok(request) => request,
        Err(SubmitBlocked::Invalid(errors)) => {
            for error in &errors {
                eprintln!("{} {}", "✗".red(), error);
            }
            bail!("Booking form has {} invalid field(s)", errors.len());
        }
        Err(SubmitBlocked::NotOpen) => bail!("Booking form is not open"),
    };

    let status = page
        .booking
        .message()
        .map(|message| message.text.clone())
        .unwrap_or_default();
    let spinner = tui::create_spinner(status);
    let result = page.booking_client().submit_booking(&request).await;
    spinner.finish_and_clear();

    let accepted = page.booking.finish_submit(result);
    if let Some(message) = page.booking.message() {
        println!("{}", message.render());
    }

    if accepted.is_none() {
        bail!("Booking was not sent");
    }
    page.booking.close();

    Ok(())
}
