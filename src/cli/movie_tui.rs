//! TUI mode for browsing movies and submitting reviews.
//!
//! This module wires the configured collaborators into module-level storage
//! and then hands the terminal to bubbletea-rs.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use marquee::review::SimulatedReviewSubmitter;
use marquee::telemetry::{NoopTelemetrySink, TelemetrySink, TracingTelemetrySink};
use marquee::tui::{
    AppServices, AppSettings, MovieApp, set_app_services, set_app_settings,
    set_initial_terminal_size,
};
use marquee::{CatalogueError, HttpCatalogueGateway, MarqueeConfig};

/// Runs the movie browser until the user quits.
///
/// # Errors
///
/// Returns an error if:
/// - The catalogue URL is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &MarqueeConfig) -> Result<(), CatalogueError> {
    let base_url = config.resolve_api_url()?;
    tracing::info!(api_url = base_url.as_str(), "starting movie browser");
    let gateway = HttpCatalogueGateway::new(base_url, config.request_timeout())?;

    // Model::init() is static, so it reads collaborators back from storage.
    // A prior value (re-running the TUI in the same process) is kept.
    let _ = set_app_services(build_services(gateway, config));
    let _ = set_app_settings(AppSettings::from(config));

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| CatalogueError::Io {
        message: format!("TUI error: {error}"),
    })
}

fn build_services(gateway: HttpCatalogueGateway, config: &MarqueeConfig) -> AppServices {
    let telemetry: Arc<dyn TelemetrySink> = if config.log_file.is_some() {
        Arc::new(TracingTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    AppServices::new(
        Arc::new(gateway),
        Arc::new(SimulatedReviewSubmitter::new(config.submit_delay())),
        telemetry,
    )
}

/// Runs the bubbletea-rs program with the `MovieApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<MovieApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
