//! Startup context storage for the movie TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and
//! `MovieApp::init()`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::catalogue::{CatalogueGateway, UnconfiguredCatalogueGateway};
use crate::review::{ReviewSubmitter, SimulatedReviewSubmitter};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `MovieApp::init()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the service collaborators.
static APP_SERVICES: OnceLock<AppServices> = OnceLock::new();

/// Collaborators the application talks to.
///
/// Each field is a trait object so tests can substitute doubles.
#[derive(Clone)]
pub struct AppServices {
    /// Source of movies and movie companies.
    pub catalogue: Arc<dyn CatalogueGateway>,
    /// Receiver of submitted reviews.
    pub submitter: Arc<dyn ReviewSubmitter>,
    /// Destination for telemetry events.
    pub telemetry: Arc<dyn TelemetrySink>,
}

impl AppServices {
    /// Bundles the given collaborators.
    #[must_use]
    pub fn new(
        catalogue: Arc<dyn CatalogueGateway>,
        submitter: Arc<dyn ReviewSubmitter>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            catalogue,
            submitter,
            telemetry,
        }
    }
}

impl Default for AppServices {
    /// Unconfigured catalogue, simulated submitter and no telemetry.
    fn default() -> Self {
        Self {
            catalogue: Arc::new(UnconfiguredCatalogueGateway),
            submitter: Arc::new(SimulatedReviewSubmitter::default()),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }
}

impl fmt::Debug for AppServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the service collaborators for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without
/// it, fetches fail with a configuration error and submissions use the
/// simulated submitter.
///
/// # Returns
///
/// `true` if the services were set, `false` if they were already set.
pub fn set_app_services(services: AppServices) -> bool {
    APP_SERVICES.set(services).is_ok()
}

/// Gets the configured services, or the unconfigured defaults.
pub(crate) fn get_app_services() -> AppServices {
    APP_SERVICES.get().cloned().unwrap_or_default()
}

/// Gets the initial terminal dimensions from storage.
///
/// Returns the stored dimensions, then the live terminal size, then 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
