//! HTTP gateway for the movie catalogue service.
//!
//! The service exposes two read-only collections, `GET {base}/movies` and
//! `GET {base}/movieCompanies`, each returning a JSON array. Any non-2xx
//! status, transport failure or undecodable body is reported as a
//! [`CatalogueError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::error::CatalogueError;
use super::models::{Movie, MovieCompany};

/// Path of the movie collection relative to the base URL.
pub const MOVIES_PATH: &str = "movies";
/// Path of the film company collection relative to the base URL.
pub const MOVIE_COMPANIES_PATH: &str = "movieCompanies";

/// Gateway that can load catalogue collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueGateway: Send + Sync {
    /// Fetch every movie in the catalogue.
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogueError>;

    /// Fetch every film company in the catalogue.
    async fn list_movie_companies(&self) -> Result<Vec<MovieCompany>, CatalogueError>;
}

/// Validated base URL of the catalogue service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueBaseUrl(Url);

impl CatalogueBaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidUrl`] when the input is not an
    /// absolute `http` or `https` URL.
    pub fn parse(raw: &str) -> Result<Self, CatalogueError> {
        let parsed = Url::parse(raw.trim())
            .map_err(|error| CatalogueError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogueError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self(parsed))
    }

    /// Builds the endpoint URL for a collection path.
    ///
    /// Trailing slashes on the base are ignored, so `http://host/` and
    /// `http://host` both resolve `movies` to `http://host/movies`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.0.as_str().trim_end_matches('/'))
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// `reqwest`-backed catalogue gateway.
#[derive(Debug, Clone)]
pub struct HttpCatalogueGateway {
    client: Client,
    base_url: CatalogueBaseUrl,
}

impl HttpCatalogueGateway {
    /// Creates a gateway with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Configuration`] when the HTTP client cannot
    /// be built.
    pub fn new(base_url: CatalogueBaseUrl, timeout: Duration) -> Result<Self, CatalogueError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| CatalogueError::Configuration {
                message: format!("failed to configure catalogue HTTP client: {error}"),
            })?;

        Ok(Self { client, base_url })
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, CatalogueError> {
        let endpoint = self.base_url.endpoint(path);
        tracing::debug!("GET {endpoint}");

        let response = self
            .client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(|error| CatalogueError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogueError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|error| CatalogueError::Decode {
                message: error.to_string(),
            })
    }
}

#[async_trait]
impl CatalogueGateway for HttpCatalogueGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogueError> {
        self.get_collection(MOVIES_PATH).await
    }

    async fn list_movie_companies(&self) -> Result<Vec<MovieCompany>, CatalogueError> {
        self.get_collection(MOVIE_COMPANIES_PATH).await
    }
}

/// Gateway used when the TUI starts without a configured catalogue.
///
/// Every call fails with a configuration error so the UI can surface it.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredCatalogueGateway;

#[async_trait]
impl CatalogueGateway for UnconfiguredCatalogueGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogueError> {
        Err(unconfigured())
    }

    async fn list_movie_companies(&self) -> Result<Vec<MovieCompany>, CatalogueError> {
        Err(unconfigured())
    }
}

fn unconfigured() -> CatalogueError {
    CatalogueError::Configuration {
        message: "catalogue context not configured".to_owned(),
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
