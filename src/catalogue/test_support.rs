//! Scripted catalogue gateway for tests that need deterministic timing.
//!
//! Responses are queued per endpoint and handed out in order; once a queue
//! holds a single response it is repeated. Each call records the
//! `tokio::time::Instant` it was made at, so tests running on a paused
//! clock can assert on retry spacing.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use super::{CatalogueError, CatalogueGateway, Movie, MovieCompany};

type Script<T> = Mutex<VecDeque<Result<Vec<T>, CatalogueError>>>;

/// Gateway that replays queued responses.
#[derive(Debug, Default)]
pub struct ScriptedCatalogueGateway {
    movies: Script<Movie>,
    companies: Script<MovieCompany>,
    movie_calls: Mutex<Vec<Instant>>,
    company_calls: Mutex<Vec<Instant>>,
}

impl ScriptedCatalogueGateway {
    /// Queues a movies response.
    #[must_use]
    pub fn with_movies(self, response: Result<Vec<Movie>, CatalogueError>) -> Self {
        push(&self.movies, response);
        self
    }

    /// Queues a movie companies response.
    #[must_use]
    pub fn with_companies(self, response: Result<Vec<MovieCompany>, CatalogueError>) -> Self {
        push(&self.companies, response);
        self
    }

    /// Returns when each movies call was made.
    #[must_use]
    pub fn movie_calls(&self) -> Vec<Instant> {
        snapshot(&self.movie_calls)
    }

    /// Returns when each companies call was made.
    #[must_use]
    pub fn company_calls(&self) -> Vec<Instant> {
        snapshot(&self.company_calls)
    }
}

#[async_trait]
impl CatalogueGateway for ScriptedCatalogueGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogueError> {
        record(&self.movie_calls);
        next(&self.movies)
    }

    async fn list_movie_companies(&self) -> Result<Vec<MovieCompany>, CatalogueError> {
        record(&self.company_calls);
        next(&self.companies)
    }
}

/// A network failure suitable for scripting.
#[must_use]
pub fn network_failure(message: &str) -> CatalogueError {
    CatalogueError::Network {
        message: message.to_owned(),
    }
}

fn push<T>(script: &Script<T>, response: Result<Vec<T>, CatalogueError>) {
    if let Ok(mut queue) = script.lock() {
        queue.push_back(response);
    }
}

fn next<T: Clone>(script: &Script<T>) -> Result<Vec<T>, CatalogueError> {
    let Ok(mut queue) = script.lock() else {
        return Err(unscripted());
    };
    if queue.len() > 1 {
        return queue.pop_front().unwrap_or_else(|| Err(unscripted()));
    }
    queue.front().cloned().unwrap_or_else(|| Err(unscripted()))
}

fn record(calls: &Mutex<Vec<Instant>>) {
    if let Ok(mut guard) = calls.lock() {
        guard.push(Instant::now());
    }
}

fn snapshot(calls: &Mutex<Vec<Instant>>) -> Vec<Instant> {
    calls
        .lock()
        .map(|guard| guard.clone())
        .unwrap_or_default()
}

fn unscripted() -> CatalogueError {
    CatalogueError::Configuration {
        message: "no scripted response".to_owned(),
    }
}
