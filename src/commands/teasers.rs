use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pinte_core::site_config::SiteConfig;
use pinte_core::view::Page;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(config: &SiteConfig) -> Result<()> {
    let page = Page::new(config).context("Failed to set up page")?;

    let spinner = tui::create_spinner("Loading upcoming events…");
    let teasers = page.teasers().await;
    spinner.finish_and_clear();

    if teasers.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    let cards: Vec<String> = teasers.iter().map(Render::render).collect();
    println!("{}", cards.join("\n\n"));

    Ok(())
}
