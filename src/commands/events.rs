use anyhow::{Context, Result};
use chrono::NaiveDate;
use pinte_core::client::FetchOptions;
use pinte_core::site_config::SiteConfig;
use pinte_core::view::Page;

use crate::render::Render;
use crate::utils::tui;

pub struct Filters {
    pub category: Option<String>,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
    pub json: bool,
}

pub async fn run(config: &SiteConfig, filters: Filters) -> Result<()> {
    let mut page = Page::new(config).context("Failed to set up page")?;
    let options = FetchOptions {
        limit: filters.limit,
        from: filters.from,
        to: filters.to,
    };

    let spinner = tui::create_spinner("Loading events…");
    let mut listing = page.init_with(&options).await;
    spinner.finish_and_clear();

    super::print_notice(&page);

    if let Some(category) = &filters.category {
        listing = page.events.select_category(category);
    }
    if let Some(search) = &filters.search {
        listing = page.events.search(search);
    }

    if filters.json {
        println!("{}", serde_json::to_string_pretty(page.events.filtered())?);
        return Ok(());
    }

    let controls = page.events.controls();
    if controls.len() > 1 {
        println!("{}\n", controls.render());
    }
    println!("{}", listing.render());

    Ok(())
}
