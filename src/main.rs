mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pinte_core::site_config::SiteConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinte")]
#[command(about = "Browse upcoming events at the Pinte and request a table")]
struct Cli {
    /// Config file (defaults to ./pinte.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the events/booking web app, overriding the config file
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered by category and search text
    Events {
        /// Category filter (e.g. "Live Music"), "all" for every category
        #[arg(short, long)]
        category: Option<String>,

        /// Text to look for in title, description and location
        #[arg(short, long)]
        search: Option<String>,

        /// Only events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Ask the endpoint for at most this many events
        #[arg(long)]
        limit: Option<u32>,

        /// Print the matching events as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show the details of one event
    Show { id: String },
    /// Show the next few upcoming events
    Teasers,
    /// Request a table
    Book {
        /// Book for this event (pre-fills the notes)
        #[arg(short, long)]
        event: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Date of the visit (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Time of arrival (HH:MM)
        #[arg(long)]
        time: String,

        /// Number of guests (1-20)
        #[arg(short, long)]
        guests: String,

        /// Anything we should know; replaces the event note when given
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show whether a backend endpoint is configured
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config, cli.endpoint)?;

    match cli.command {
        Commands::Events {
            category,
            search,
            from,
            to,
            limit,
            json,
        } => {
            let filters = commands::events::Filters {
                category,
                search,
                from,
                to,
                limit,
                json,
            };
            commands::events::run(&config, filters).await
        }
        Commands::Show { id } => commands::show::run(&config, &id).await,
        Commands::Teasers => commands::teasers::run(&config).await,
        Commands::Book {
            event,
            name,
            email,
            phone,
            date,
            time,
            guests,
            notes,
        } => {
            let request = commands::book::BookArgs {
                event,
                name,
                email,
                phone,
                date,
                time,
                guests,
                notes,
            };
            commands::book::run(&config, request).await
        }
        Commands::Status => commands::status::run(&config),
    }
}

fn load_config(path: Option<PathBuf>, endpoint: Option<String>) -> Result<SiteConfig> {
    let mut config = SiteConfig::load(path.as_deref()).context("Failed to load site config")?;

    if let Some(endpoint) = endpoint {
        config.endpoint = Some(endpoint);
        config.endpoint().context("Invalid --endpoint")?;
    }

    tracing::debug!(endpoint = ?config.endpoint, timezone = %config.timezone, "Loaded site config");

    Ok(config)
}
