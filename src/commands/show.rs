use anyhow::{Result, bail};
use pinte_core::site_config::SiteConfig;

use crate::render::Render;

pub async fn run(config: &SiteConfig, id: &str) -> Result<()> {
    let mut page = super::loaded_page(config).await?;

    match page.events.open_details(id) {
        Some(details) => println!("{}", details.render()),
        None => bail!("No event with id '{}'", id),
    }

    Ok(())
}
