//! Scenario state for the companies retry BDD tests.
//!
//! Scenarios run on a current-thread runtime with a paused clock so retry
//! delays elapse instantly and can be measured exactly.

use std::sync::Arc;
use std::time::Duration;

use marquee::catalogue::models::test_support::{company, movie};
use marquee::catalogue::test_support::{ScriptedCatalogueGateway, network_failure};
use marquee::tui::test_support::CommandDriver;
use marquee::tui::{AppServices, AppSettings, MovieApp};
use marquee::{NoopTelemetrySink, SimulatedReviewSubmitter};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Builder;

use super::runtime::SharedRuntime;

/// Retry delay used by every scenario.
pub(crate) const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// State shared across steps in a companies retry scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct RetryScenarioState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) gateway: Slot<Arc<ScriptedCatalogueGateway>>,
    pub(crate) driver: Slot<CommandDriver>,
}

impl RetryScenarioState {
    /// Scripts `failures` company failures followed by a success.
    pub(crate) fn script_companies(&self, failures: u32) {
        let mut gateway = ScriptedCatalogueGateway::default()
            .with_movies(Ok(vec![movie("1", "Alien", &[8.0], "c1")]));
        for _ in 0..failures {
            gateway = gateway.with_companies(Err(network_failure("connection refused")));
        }
        gateway = gateway.with_companies(Ok(vec![company("c1", "Brandywine")]));
        self.gateway.set(Arc::new(gateway));
    }

    /// Builds the paused runtime and the browser.
    pub(crate) fn start_browser(&self) {
        let runtime = Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        self.runtime.set(SharedRuntime::new(runtime));

        let gateway = self
            .gateway
            .get()
            .unwrap_or_else(|| panic!("gateway not scripted"));
        let services = AppServices::new(
            gateway,
            Arc::new(SimulatedReviewSubmitter::default()),
            Arc::new(NoopTelemetrySink),
        );
        let settings = AppSettings {
            companies_retry_delay: RETRY_DELAY,
            ..AppSettings::default()
        };
        let app = MovieApp::with_dimensions(services, settings, 120, 40);
        self.driver.set(CommandDriver::new(app));
    }

    /// Returns the runtime created by [`Self::start_browser`].
    pub(crate) fn runtime(&self) -> SharedRuntime {
        self.runtime
            .get()
            .unwrap_or_else(|| panic!("runtime not initialised"))
    }

    /// Returns the offsets between consecutive company requests.
    pub(crate) fn company_request_gaps(&self) -> Vec<Duration> {
        let calls = self
            .gateway
            .with_ref(|gateway| gateway.company_calls())
            .unwrap_or_else(|| panic!("gateway not scripted"));
        calls
            .windows(2)
            .filter_map(|pair| match pair {
                [earlier, later] => Some(*later - *earlier),
                _ => None,
            })
            .collect()
    }
}
