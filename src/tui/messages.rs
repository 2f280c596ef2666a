//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::catalogue::{CatalogueError, Movie, MovieCompany};
use crate::review::SubmissionReceipt;

use super::state::SortKey;

/// Messages for the movie listing TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first row.
    Home,
    /// Move cursor to last row.
    End,

    // Table
    /// Select the movie under the cursor.
    SelectCursorRow,
    /// Activate a sort column, toggling direction if it is already active.
    SortBy(SortKey),

    // Data loading
    /// Synthetic startup event emitted immediately after `init()`.
    Initialized,
    /// Request a refresh of the movie list.
    RefreshRequested,
    /// A movies request completed successfully.
    MoviesLoaded {
        /// Generation of the request that produced this response.
        request: u64,
        /// Movies returned by the service.
        movies: Vec<Movie>,
        /// Request latency in milliseconds.
        latency_ms: u64,
    },
    /// A movies request failed.
    MoviesFailed {
        /// Generation of the request that failed.
        request: u64,
        /// Failure detail.
        message: String,
    },
    /// The movie companies request completed successfully.
    CompaniesLoaded {
        /// Companies returned by the service.
        companies: Vec<MovieCompany>,
        /// Request latency in milliseconds.
        latency_ms: u64,
    },
    /// The movie companies request failed.
    CompaniesFailed(String),
    /// A scheduled companies retry timer elapsed.
    CompaniesRetryDue {
        /// Retry generation the timer was armed under.
        generation: u64,
    },

    // Review flow
    /// Open the modal review form or focus the inline one.
    OpenReviewForm,
    /// Append a character to the review draft.
    ReviewInsertChar(char),
    /// Delete the last character of the review draft.
    ReviewBackspace,
    /// Submit the review draft for the selected movie.
    ReviewSubmit,
    /// Discard the draft and close the form.
    ReviewCancel,
    /// The submitter finished handling a review.
    ReviewSubmitted {
        /// Movie the review was submitted for.
        movie_id: String,
        /// Receipt on success, failure detail otherwise.
        outcome: Result<SubmissionReceipt, String>,
    },

    // Notifications
    /// A notification's display time elapsed.
    NotificationExpired {
        /// Generation of the notification the timer was armed for.
        generation: u64,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a movies failure message from a `CatalogueError`.
    #[must_use]
    pub fn movies_failed(request: u64, error: &CatalogueError) -> Self {
        Self::MoviesFailed {
            request,
            message: error.to_string(),
        }
    }

    /// Returns true if this is a navigation message.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true if this message changes table selection or ordering.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::SelectCursorRow | Self::SortBy(_))
    }

    /// Returns true if this is a data loading message.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::Initialized
                | Self::RefreshRequested
                | Self::MoviesLoaded { .. }
                | Self::MoviesFailed { .. }
                | Self::CompaniesLoaded { .. }
                | Self::CompaniesFailed(_)
                | Self::CompaniesRetryDue { .. }
        )
    }

    /// Returns true if this is a review form message.
    #[must_use]
    pub const fn is_review(&self) -> bool {
        matches!(
            self,
            Self::OpenReviewForm
                | Self::ReviewInsertChar(_)
                | Self::ReviewBackspace
                | Self::ReviewSubmit
                | Self::ReviewCancel
                | Self::ReviewSubmitted { .. }
        )
    }
}
