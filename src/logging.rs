//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so log output is
//! only enabled when a log file is configured. The filter honours
//! `RUST_LOG` and defaults to `marquee=info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::catalogue::CatalogueError;

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "marquee=info";

/// Builds the log filter from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a global subscriber that appends to `log_file`.
///
/// Returns `Ok(false)` without installing anything when `log_file` is
/// `None`.
///
/// # Errors
///
/// Returns [`CatalogueError::Io`] when the file cannot be opened, or
/// [`CatalogueError::Configuration`] when a global subscriber is already
/// installed.
pub fn init_logging(log_file: Option<&str>) -> Result<bool, CatalogueError> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CatalogueError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })?;

    tracing_subscriber::registry()
        .with(log_filter())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(Mutex::new(file))
                .compact(),
        )
        .try_init()
        .map_err(|error| CatalogueError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })?;

    Ok(true)
}
