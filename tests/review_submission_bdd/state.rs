//! Scenario state for the review submission BDD tests.

use std::sync::Arc;

use marquee::catalogue::models::test_support::{company, movie};
use marquee::catalogue::test_support::ScriptedCatalogueGateway;
use marquee::tui::messages::AppMsg;
use marquee::tui::test_support::CommandDriver;
use marquee::tui::{AppServices, AppSettings, MovieApp};
use marquee::{NoopTelemetrySink, SimulatedReviewSubmitter};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Builder;
use tokio::time::Instant;

use super::runtime::SharedRuntime;

/// Terminal width narrow enough for the modal form.
const NARROW_WIDTH: u16 = 60;

/// State shared across steps in a review submission scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct SubmissionState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) driver: Slot<CommandDriver>,
    /// When the last submission was requested.
    pub(crate) submitted_at: Slot<Instant>,
    /// When the last submission outcome arrived.
    pub(crate) completed_at: Slot<Instant>,
}

impl SubmissionState {
    /// Starts a narrow browser on a paused clock and loads `title`.
    pub(crate) fn start_with_movie(&self, title: &str) {
        let runtime = SharedRuntime::new(
            Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}")),
        );

        let gateway = ScriptedCatalogueGateway::default()
            .with_movies(Ok(vec![movie("1", title, &[8.0], "c1")]))
            .with_companies(Ok(vec![company("c1", "Brandywine")]));
        let services = AppServices::new(
            Arc::new(gateway),
            Arc::new(SimulatedReviewSubmitter::default()),
            Arc::new(NoopTelemetrySink),
        );
        let app = MovieApp::with_dimensions(services, AppSettings::default(), NARROW_WIDTH, 24);
        let mut driver = CommandDriver::new(app);

        driver.send(&AppMsg::Initialized);
        let loaded = runtime.block_on(
            driver.run_until(4, |msg| matches!(msg, AppMsg::MoviesLoaded { .. })),
        );
        assert!(loaded.is_some(), "movies should load");

        self.runtime.set(runtime);
        self.driver.set(driver);
    }

    /// Returns the runtime created by [`Self::start_with_movie`].
    pub(crate) fn runtime(&self) -> SharedRuntime {
        self.runtime
            .get()
            .unwrap_or_else(|| panic!("runtime not initialised"))
    }
}
