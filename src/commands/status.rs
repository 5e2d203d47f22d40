use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pinte_core::site_config::SiteConfig;
use pinte_core::view::Page;

use crate::render::Render;

pub fn run(config: &SiteConfig) -> Result<()> {
    let page = Page::new(config).context("Failed to set up page")?;

    println!("{}", page.api_status().render());
    println!("{} {}", "Timezone:".bold(), config.timezone);
    println!("{} {}", "Contact:".bold(), config.contact_email);

    Ok(())
}
