//! Site configuration.
//!
//! Read from an optional `pinte.toml`; every key has a default, so a missing
//! file yields a working demo-mode setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use config::{Config, File};
use serde::Deserialize;

use crate::endpoint::Endpoint;
use crate::error::{PinteError, PinteResult};

static DEFAULT_CONFIG_FILE: &str = "pinte.toml";

fn default_contact_email() -> String {
    "hello@pinte.amatt.ch".to_string()
}

fn default_timezone() -> String {
    "Europe/Zurich".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_demo_delay_ms() -> u64 {
    400
}

fn default_success_close_delay_ms() -> u64 {
    3000
}

fn default_demo_close_delay_ms() -> u64 {
    2000
}

fn default_teaser_count() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Base URL of the events/booking web app. Absent or placeholder means demo mode.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Shown to visitors when a booking cannot be sent
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// IANA zone used to display and compare event times
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Simulated latency of a demo-mode booking
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,

    /// How long the booking confirmation stays up before the form closes
    #[serde(default = "default_success_close_delay_ms")]
    pub success_close_delay_ms: u64,

    #[serde(default = "default_demo_close_delay_ms")]
    pub demo_close_delay_ms: u64,

    /// Number of upcoming events shown as teasers
    #[serde(default = "default_teaser_count")]
    pub teaser_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            endpoint: None,
            contact_email: default_contact_email(),
            timezone: default_timezone(),
            request_timeout_secs: default_request_timeout_secs(),
            demo_delay_ms: default_demo_delay_ms(),
            success_close_delay_ms: default_success_close_delay_ms(),
            demo_close_delay_ms: default_demo_close_delay_ms(),
            teaser_count: default_teaser_count(),
        }
    }
}

impl SiteConfig {
    /// Load config from `path`, or from `pinte.toml` in the working
    /// directory when no path is given. Only an explicit path must exist.
    pub fn load(path: Option<&Path>) -> PinteResult<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let config: SiteConfig = Config::builder()
            .add_source(File::from(path).required(required))
            .build()
            .map_err(|e| PinteError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PinteError::Config(e.to_string()))?;

        // Surface bad values at load time rather than on first use
        config.tz()?;
        config.endpoint()?;

        Ok(config)
    }

    pub fn endpoint(&self) -> PinteResult<Endpoint> {
        Endpoint::from_setting(self.endpoint.as_deref())
    }

    pub fn tz(&self) -> PinteResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| PinteError::Config(format!("Unknown timezone '{}': {e}", self.timezone)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn demo_delay(&self) -> Duration {
        Duration::from_millis(self.demo_delay_ms)
    }

    pub fn success_close_delay(&self) -> Duration {
        Duration::from_millis(self.success_close_delay_ms)
    }

    pub fn demo_close_delay(&self) -> Duration {
        Duration::from_millis(self.demo_close_delay_ms)
    }
}
