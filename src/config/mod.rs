//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.marquee.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MARQUEE_API_URL`, `MARQUEE_COMPACT_WIDTH`
//!    and friends, or the legacy `MOVIE_API_URL`
//! 4. **Command-line arguments** – `--api-url`/`-u` and friends
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://localhost:3000"
//! request_timeout_secs = 10
//! companies_retry_delay_ms = 1000
//! companies_retry_limit = 20
//! submit_delay_ms = 1000
//! notification_ttl_ms = 6000
//! compact_width = 80
//! log_file = "marquee.log"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalogue::{CatalogueBaseUrl, CatalogueError};

/// Catalogue base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Legacy environment variable consulted when `api_url` is unset.
pub const LEGACY_API_URL_ENV: &str = "MOVIE_API_URL";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COMPANIES_RETRY_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 6000;
const DEFAULT_COMPACT_WIDTH: u16 = 80;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use marquee::MarqueeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MarqueeConfig::load().expect("failed to load configuration");
/// let base_url = config.resolve_api_url().expect("valid catalogue URL");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MARQUEE",
    discovery(
        dotfile_name = ".marquee.toml",
        config_file_name = "marquee.toml",
        app_name = "marquee"
    )
)]
pub struct MarqueeConfig {
    /// Base URL of the movie catalogue service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `MARQUEE_API_URL` or `MOVIE_API_URL` (legacy)
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// HTTP timeout for catalogue requests, in seconds.
    #[ortho_config()]
    pub request_timeout_secs: u64,

    /// Delay before a failed film company fetch is retried, in milliseconds.
    #[ortho_config()]
    pub companies_retry_delay_ms: u64,

    /// Maximum number of consecutive film company retries.
    ///
    /// Unset means the fetch is retried until it succeeds.
    #[ortho_config()]
    pub companies_retry_limit: Option<u32>,

    /// Latency of the simulated review submission, in milliseconds.
    #[ortho_config()]
    pub submit_delay_ms: u64,

    /// How long a notification stays visible, in milliseconds.
    #[ortho_config()]
    pub notification_ttl_ms: u64,

    /// Terminal width (columns) below which the review form opens as a
    /// modal instead of rendering inline.
    ///
    /// Can be provided via:
    /// - CLI: `--compact-width <COLUMNS>` or `-w <COLUMNS>`
    /// - Environment: `MARQUEE_COMPACT_WIDTH`
    /// - Config file: `compact_width = 80`
    #[ortho_config(cli_short = 'w')]
    pub compact_width: u16,

    /// File that receives tracing output.
    ///
    /// Logging is disabled when unset so the terminal UI is not disturbed.
    #[ortho_config()]
    pub log_file: Option<String>,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            companies_retry_delay_ms: DEFAULT_COMPANIES_RETRY_DELAY_MS,
            companies_retry_limit: None,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            compact_width: DEFAULT_COMPACT_WIDTH,
            log_file: None,
        }
    }
}

impl MarqueeConfig {
    /// Resolves the catalogue base URL.
    ///
    /// Falls back to the legacy `MOVIE_API_URL` environment variable and
    /// then to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidUrl`] when the resolved value is not
    /// an absolute `http`/`https` URL.
    pub fn resolve_api_url(&self) -> Result<CatalogueBaseUrl, CatalogueError> {
        let raw = self
            .api_url
            .clone()
            .or_else(|| env::var(LEGACY_API_URL_ENV).ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        CatalogueBaseUrl::parse(&raw)
    }

    /// HTTP timeout for catalogue requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Delay before a failed film company fetch is retried.
    #[must_use]
    pub const fn companies_retry_delay(&self) -> Duration {
        Duration::from_millis(self.companies_retry_delay_ms)
    }

    /// Latency of the simulated review submission.
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Lifetime of a transient notification.
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Configuration`] when `compact_width`,
    /// `notification_ttl_ms` or `request_timeout_secs` is zero, or
    /// [`CatalogueError::InvalidUrl`] when the catalogue URL cannot be
    /// parsed.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        if self.compact_width == 0 {
            return Err(CatalogueError::Configuration {
                message: "compact_width must be at least 1 column".to_owned(),
            });
        }

        if self.notification_ttl_ms == 0 {
            return Err(CatalogueError::Configuration {
                message: "notification_ttl_ms must be greater than zero".to_owned(),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(CatalogueError::Configuration {
                message: "request_timeout_secs must be greater than zero".to_owned(),
            });
        }

        self.resolve_api_url().map(|_| ())
    }
}

#[cfg(test)]
mod tests;
