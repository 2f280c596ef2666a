//! Movie and company loading handlers for the movie TUI.
//!
//! The two lists load independently. Movies requests are numbered so that
//! only the newest response is applied when refreshes overlap. A failed
//! companies fetch schedules a single retry timer; the timer's generation
//! lets success, refresh and quit invalidate it.

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bubbletea_rs::Cmd;

use super::{Commands, MovieApp};
use crate::catalogue::{Movie, MovieCompany};
use crate::telemetry::{CatalogueResource, TelemetryEvent};
use crate::tui::messages::AppMsg;
use crate::tui::state::NotificationKind;

impl MovieApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Commands {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::MoviesLoaded {
                request,
                movies,
                latency_ms,
            } => self.handle_movies_loaded(*request, movies, *latency_ms),
            AppMsg::MoviesFailed { request, message } => {
                self.handle_movies_failed(*request, message)
            }
            AppMsg::CompaniesLoaded {
                companies,
                latency_ms,
            } => self.handle_companies_loaded(companies, *latency_ms),
            AppMsg::CompaniesFailed(message) => self.handle_companies_failed(message),
            AppMsg::CompaniesRetryDue { generation } => self.handle_companies_retry_due(*generation),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                Commands::new()
            }
        }
    }

    /// Starts both fetches once the program is running.
    fn handle_initialized(&mut self) -> Commands {
        vec![self.fetch_movies_cmd(), self.fetch_companies_cmd()]
    }

    /// Re-fetches movies.
    ///
    /// A pending companies retry is cancelled and replaced by an immediate
    /// companies fetch.
    fn handle_refresh_requested(&mut self) -> Commands {
        let mut commands = vec![self.fetch_movies_cmd()];
        if self.companies_retry.is_pending() {
            self.companies_retry.cancel();
            commands.push(self.fetch_companies_cmd());
        }
        commands
    }

    fn handle_movies_loaded(&mut self, request: u64, movies: &[Movie], latency_ms: u64) -> Commands {
        if request != self.movies_request {
            tracing::debug!(
                request,
                newest = self.movies_request,
                "dropping stale movies response"
            );
            return Commands::new();
        }

        self.loading = false;
        self.apply_movies(movies.to_vec());
        tracing::info!(count = self.movies.len(), latency_ms, "movies loaded");
        self.services.telemetry.record(TelemetryEvent::FetchCompleted {
            resource: CatalogueResource::Movies,
            item_count: self.movies.len(),
            latency_ms,
        });
        Commands::new()
    }

    fn handle_movies_failed(&mut self, request: u64, message: &str) -> Commands {
        if request != self.movies_request {
            tracing::debug!(request, "dropping stale movies failure");
            return Commands::new();
        }

        self.loading = false;
        tracing::warn!(error = message, "movies fetch failed");
        self.services.telemetry.record(TelemetryEvent::FetchFailed {
            resource: CatalogueResource::Movies,
        });
        vec![self.notify(
            NotificationKind::Error,
            format!("Failed to fetch movies: {message}"),
        )]
    }

    fn handle_companies_loaded(&mut self, companies: &[MovieCompany], latency_ms: u64) -> Commands {
        self.companies = companies.to_vec();
        self.companies_retry.reset();
        tracing::info!(count = self.companies.len(), latency_ms, "movie companies loaded");
        self.services.telemetry.record(TelemetryEvent::FetchCompleted {
            resource: CatalogueResource::MovieCompanies,
            item_count: self.companies.len(),
            latency_ms,
        });
        Commands::new()
    }

    fn handle_companies_failed(&mut self, message: &str) -> Commands {
        tracing::warn!(error = message, "movie companies fetch failed");
        self.services.telemetry.record(TelemetryEvent::FetchFailed {
            resource: CatalogueResource::MovieCompanies,
        });
        let mut commands = vec![self.notify(
            NotificationKind::Error,
            format!("Failed to fetch movie companies: {message}"),
        )];

        let delay = self.settings.companies_retry_delay;
        match self.companies_retry.schedule() {
            Some(ticket) => {
                tracing::debug!(attempt = ticket.attempt, "scheduling companies retry");
                self.services.telemetry.record(TelemetryEvent::RetryScheduled {
                    resource: CatalogueResource::MovieCompanies,
                    attempt: ticket.attempt,
                    delay_ms: duration_to_millis(delay),
                });
                commands.push(Self::arm_companies_retry(ticket.generation, delay));
            }
            None if self.companies_retry.is_pending() => {
                tracing::debug!("companies retry already pending");
            }
            None => {
                tracing::warn!(
                    attempts = self.companies_retry.attempts(),
                    "companies retry limit reached"
                );
            }
        }
        commands
    }

    fn handle_companies_retry_due(&mut self, generation: u64) -> Commands {
        if !self.companies_retry.fire(generation) {
            tracing::debug!(generation, "ignoring cancelled companies retry");
            return Commands::new();
        }
        vec![self.fetch_companies_cmd()]
    }

    /// Replaces the movie list, keeping the cursor on the same movie and
    /// dropping a selection whose movie disappeared.
    fn apply_movies(&mut self, movies: Vec<Movie>) {
        let cursor_id = self.cursor_movie_id();
        self.movies = movies;
        self.rebuild_display_order();
        self.restore_cursor(cursor_id.as_deref());

        if self.selected_movie_id.is_some() && self.selected_movie().is_none() {
            tracing::debug!("selected movie no longer listed; clearing selection");
            self.clear_selection();
        }
    }

    /// Starts a movies request, superseding any in flight.
    pub(super) fn fetch_movies_cmd(&mut self) -> Cmd {
        self.movies_request = self.movies_request.wrapping_add(1);
        self.loading = true;
        let request = self.movies_request;
        let gateway = Arc::clone(&self.services.catalogue);

        Box::pin(async move {
            let start = Instant::now();
            let msg = match gateway.list_movies().await {
                Ok(movies) => AppMsg::MoviesLoaded {
                    request,
                    movies,
                    latency_ms: duration_to_millis(start.elapsed()),
                },
                Err(error) => AppMsg::movies_failed(request, &error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Starts a companies request.
    pub(super) fn fetch_companies_cmd(&self) -> Cmd {
        let gateway = Arc::clone(&self.services.catalogue);

        Box::pin(async move {
            let start = Instant::now();
            let msg = match gateway.list_movie_companies().await {
                Ok(companies) => AppMsg::CompaniesLoaded {
                    companies,
                    latency_ms: duration_to_millis(start.elapsed()),
                },
                Err(error) => AppMsg::CompaniesFailed(error.to_string()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that reports retry `generation` as due after
    /// `delay`.
    pub(super) fn arm_companies_retry(generation: u64, delay: Duration) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Some(Box::new(AppMsg::CompaniesRetryDue { generation }) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle and the
    /// initial fetches without waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Durations over u64::MAX milliseconds are unrealistic"
)]
const fn duration_to_millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}
