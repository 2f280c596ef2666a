//! Read-only client for the remote movie catalogue.
//!
//! The catalogue is an external HTTP service that lists movies and the film
//! companies that made them. This module holds the wire records, the
//! gateway abstraction used by the TUI, and its `reqwest` implementation.

pub mod error;
pub mod gateway;
pub mod models;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::CatalogueError;
pub use gateway::{
    CatalogueBaseUrl, CatalogueGateway, HttpCatalogueGateway, UnconfiguredCatalogueGateway,
};
pub use models::{Movie, MovieCompany, average_score, company_name, format_average};
