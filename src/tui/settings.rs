//! Runtime settings for the movie TUI and their startup storage.

use std::sync::OnceLock;
use std::time::Duration;

use crate::config::MarqueeConfig;

/// Global storage for TUI settings.
///
/// This is set before TUI startup from CLI/config sources. When not provided,
/// the application falls back to built-in defaults.
pub(super) static APP_SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Static fallback settings.
pub(super) static DEFAULT_APP_SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Timing and layout settings consumed by [`super::MovieApp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Terminal width below which the review form is shown as a modal.
    pub compact_width: u16,
    /// How long a notification stays visible.
    pub notification_ttl: Duration,
    /// Delay before retrying a failed companies fetch.
    pub companies_retry_delay: Duration,
    /// Cap on consecutive companies retries; `None` retries forever.
    pub companies_retry_limit: Option<u32>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&MarqueeConfig::default())
    }
}

impl From<&MarqueeConfig> for AppSettings {
    fn from(config: &MarqueeConfig) -> Self {
        Self {
            compact_width: config.compact_width.max(1),
            notification_ttl: config.notification_ttl(),
            companies_retry_delay: config.companies_retry_delay(),
            companies_retry_limit: config.companies_retry_limit,
        }
    }
}

/// Sets TUI settings for startup.
///
/// Returns `true` when the value is set for the first time, or `false` when a
/// prior value already exists.
pub fn set_app_settings(settings: AppSettings) -> bool {
    APP_SETTINGS.set(settings).is_ok()
}

/// Gets TUI settings, falling back to defaults.
pub(crate) fn get_app_settings() -> AppSettings {
    APP_SETTINGS
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_APP_SETTINGS.get_or_init(AppSettings::default).clone())
}
