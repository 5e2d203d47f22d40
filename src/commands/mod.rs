pub mod book;
pub mod events;
pub mod show;
pub mod status;
pub mod teasers;

use anyhow::{Context, Result};
use pinte_core::site_config::SiteConfig;
use pinte_core::view::Page;

use crate::render::Render;
use crate::utils::tui;

/// Build the page and load the listing behind a spinner.
async fn loaded_page(config: &SiteConfig) -> Result<Page> {
    let mut page = Page::new(config).context("Failed to set up page")?;

    let spinner = tui::create_spinner("Loading events…");
    page.init().await;
    spinner.finish_and_clear();

    print_notice(&page);
    Ok(page)
}

fn print_notice(page: &Page) {
    if let Some(notice) = page.events.notice() {
        eprintln!("{}\n", notice.render());
    }
}
