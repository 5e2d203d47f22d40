//! Remote endpoint configuration.
//!
//! The site talks to one spreadsheet-backed web app. When no URL has been
//! set up, every call short-circuits to local demo behavior instead.

use url::Url;

use crate::error::{PinteError, PinteResult};

/// Placeholder shipped in the site template before a real URL is filled in.
pub const PLACEHOLDER_ENDPOINT: &str = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL_HERE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Base URL of the remote web app
    Configured(Url),
    /// No backend: serve demo data and simulate bookings
    Unconfigured,
}

impl Endpoint {
    /// Interpret a configured base URL setting.
    ///
    /// Missing, blank and placeholder values mean `Unconfigured`.
    pub fn from_setting(value: Option<&str>) -> PinteResult<Self> {
        let value = match value.map(str::trim) {
            None | Some("") | Some(PLACEHOLDER_ENDPOINT) => return Ok(Endpoint::Unconfigured),
            Some(v) => v,
        };

        let url = Url::parse(value).map_err(|e| PinteError::InvalidUrl(format!("{value}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(Endpoint::Configured(url)),
            other => Err(PinteError::InvalidUrl(format!(
                "{value}: unsupported scheme '{other}'"
            ))),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Endpoint::Configured(_))
    }

    /// Join `path` (e.g. `/events`) onto the base URL, dropping a trailing
    /// slash on the base. `None` when unconfigured.
    pub fn url_for(&self, path: &str) -> Option<String> {
        match self {
            Endpoint::Configured(base) => {
                let base = base.as_str().trim_end_matches('/');
                Some(format!("{base}{path}"))
            }
            Endpoint::Unconfigured => None,
        }
    }
}

/// Snapshot of the endpoint setup, for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    pub configured: bool,
    pub base_url: Option<String>,
}

impl From<&Endpoint> for ApiStatus {
    fn from(endpoint: &Endpoint) -> Self {
        match endpoint {
            Endpoint::Configured(url) => ApiStatus {
                configured: true,
                base_url: Some(url.to_string()),
            },
            Endpoint::Unconfigured => ApiStatus {
                configured: false,
                base_url: None,
            },
        }
    }
}
