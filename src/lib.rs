//! Marquee library crate: a terminal client for a movie catalogue.
//!
//! The library loads movies and film companies from a read-only HTTP
//! service, derives each movie's average review score, and provides a
//! bubbletea-rs interface for sorting the list and writing a short review
//! of the selected movie.

pub mod catalogue;
pub mod config;
pub mod logging;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use catalogue::{
    CatalogueBaseUrl, CatalogueError, CatalogueGateway, HttpCatalogueGateway, Movie,
    MovieCompany,
};
pub use config::MarqueeConfig;
pub use review::{ReviewSubmitter, SimulatedReviewSubmitter};
pub use telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink, TracingTelemetrySink};
