//! Scenario state and runtime/server initialisation for the movie listing
//! BDD tests.

use std::sync::Arc;
use std::time::Duration;

use marquee::catalogue::CatalogueBaseUrl;
use marquee::tui::test_support::CommandDriver;
use marquee::tui::{AppServices, AppSettings, MovieApp};
use marquee::{HttpCatalogueGateway, NoopTelemetrySink, SimulatedReviewSubmitter};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::runtime::SharedRuntime;

/// State shared across steps in a movie listing scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ListingState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) driver: Slot<CommandDriver>,
}

impl ListingState {
    /// Builds a browser pointed at the mock server.
    pub(crate) fn start_browser(&self) {
        let uri = self
            .server
            .with_ref(MockServer::uri)
            .unwrap_or_else(|| panic!("mock server not initialised"));
        let base_url = CatalogueBaseUrl::parse(&uri)
            .unwrap_or_else(|error| panic!("mock server URL rejected: {error}"));
        let gateway = HttpCatalogueGateway::new(base_url, Duration::from_secs(5))
            .unwrap_or_else(|error| panic!("HTTP client failed to build: {error}"));
        let services = AppServices::new(
            Arc::new(gateway),
            Arc::new(SimulatedReviewSubmitter::default()),
            Arc::new(NoopTelemetrySink),
        );
        let app = MovieApp::with_dimensions(services, AppSettings::default(), 120, 40);
        self.driver.set(CommandDriver::new(app));
    }
}

/// Ensures the runtime and server are initialised in `ListingState`.
pub(crate) fn ensure_runtime_and_server(listing_state: &ListingState) -> SharedRuntime {
    if listing_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        listing_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = listing_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if listing_state.server.with_ref(|_| ()).is_none() {
        listing_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Mounts both catalogue endpoints on the mock server.
pub(crate) fn mount_catalogue(listing_state: &ListingState, movies: ResponseTemplate, companies: &Value) {
    let runtime = ensure_runtime_and_server(listing_state);

    let movies_mock = Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(movies);
    let companies_mock = Mock::given(method("GET"))
        .and(path("/movieCompanies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(companies));

    listing_state
        .server
        .with_ref(|server| {
            runtime.block_on(async {
                movies_mock.mount(server).await;
                companies_mock.mount(server).await;
            });
        })
        .unwrap_or_else(|| panic!("mock server not initialised"));
}
