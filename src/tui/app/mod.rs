//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! movie listing TUI. It owns the movie and company lists, the derived
//! display order, the selection and review draft, the notification slot and
//! the timers that drive retries and auto-dismissal.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: movie and company loading, retries and refresh
//! - `table_handlers`: sorting and row selection
//! - `review_handlers`: the review form and submission flow
//! - `navigation`: cursor movement
//! - `layout`: height calculations and scrolling
//! - `rendering`: view rendering methods for terminal output
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use crate::catalogue::{Movie, MovieCompany};

use super::components::MovieTableComponent;
use super::messages::AppMsg;
use super::settings::AppSettings;
use super::state::{
    Notification, NotificationKind, NotificationState, RetryState, ReviewDraft, ReviewPhase,
    SortState, TableState,
};
use super::storage::AppServices;

mod fetch_handlers;
mod layout;
mod model_impl;
mod navigation;
mod rendering;
mod review_handlers;
mod table_handlers;

/// Rows used by the title and totals lines.
pub(super) const HEADER_HEIGHT: usize = 2;
/// Rows used by the table's column header.
pub(super) const TABLE_HEADER_HEIGHT: usize = 1;
/// Rows used by the notification line and status bar.
pub(super) const FOOTER_HEIGHT: usize = 2;
/// Rows used by the inline review form, including its leading blank line.
pub(super) const INLINE_FORM_HEIGHT: usize = 5;
/// The table always shows at least one body row.
pub(super) const MIN_LIST_HEIGHT: usize = 1;

/// Commands produced by one update step, before batching.
pub type Commands = Vec<Cmd>;

/// Main application model for the movie listing TUI.
#[derive(Debug)]
pub struct MovieApp {
    /// Movies in the order the service returned them.
    pub(crate) movies: Vec<Movie>,
    /// Known movie companies.
    pub(crate) companies: Vec<MovieCompany>,
    /// Cached display order (indices into `movies`).
    /// Invalidated when movies or the sort change.
    display_order: Vec<usize>,
    /// Sort, cursor and scroll state.
    pub(crate) table: TableState,
    /// Id of the selected movie.
    pub(crate) selected_movie_id: Option<String>,
    /// Review text for the selected movie.
    pub(crate) draft: ReviewDraft,
    /// Whether the review form has keyboard focus (the modal is open on
    /// narrow terminals).
    pub(crate) form_focused: bool,
    /// Movie id of the in-flight submission.
    pub(crate) submitting: Option<String>,
    /// Whether the last submission was confirmed and nothing changed since.
    pub(crate) confirmed: bool,
    /// Transient notification slot.
    pub(crate) notifications: NotificationState,
    /// Whether the newest movies request is still in flight.
    pub(crate) loading: bool,
    /// Generation of the newest movies request.
    movies_request: u64,
    /// Companies retry bookkeeping.
    pub(crate) companies_retry: RetryState,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Movie table component.
    movie_table: MovieTableComponent,
    settings: AppSettings,
    services: AppServices,
}

impl MovieApp {
    /// Creates an application with no data, using the given collaborators.
    #[must_use]
    pub fn new(services: AppServices, settings: AppSettings) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        Self::with_dimensions(services, settings, width, height)
    }

    /// Creates an application with explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(
        services: AppServices,
        settings: AppSettings,
        width: u16,
        height: u16,
    ) -> Self {
        let companies_retry = RetryState::new(settings.companies_retry_limit);
        let mut app = Self {
            movies: Vec::new(),
            companies: Vec::new(),
            display_order: Vec::new(),
            table: TableState::new(),
            selected_movie_id: None,
            draft: ReviewDraft::default(),
            form_focused: false,
            submitting: None,
            confirmed: false,
            notifications: NotificationState::default(),
            loading: false,
            movies_request: 0,
            companies_retry,
            width: width.max(1),
            height: height.max(1),
            show_help: false,
            movie_table: MovieTableComponent::new(),
            settings,
            services,
        };
        app.set_visible_list_height();
        app
    }

    /// Creates an application with default collaborators and settings.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(AppServices::default(), AppSettings::default())
    }

    /// Returns all movies in source order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns the known movie companies.
    #[must_use]
    pub fn companies(&self) -> &[MovieCompany] {
        &self.companies
    }

    /// Returns the movies in display order.
    #[must_use]
    pub fn sorted_movies(&self) -> Vec<&Movie> {
        self.display_order
            .iter()
            .filter_map(|&index| self.movies.get(index))
            .collect()
    }

    /// Returns the active sort column and direction.
    #[must_use]
    pub const fn sort_state(&self) -> SortState {
        self.table.sort
    }

    /// Returns the current cursor position within the display order.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.table.cursor_position
    }

    /// Returns the movie under the cursor, if any.
    #[must_use]
    pub fn cursor_movie(&self) -> Option<&Movie> {
        self.display_order
            .get(self.table.cursor_position)
            .and_then(|&index| self.movies.get(index))
    }

    /// Returns the selected movie, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        let id = self.selected_movie_id.as_deref()?;
        self.movies.iter().find(|movie| movie.id == id)
    }

    /// Returns the review draft.
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Returns the visible notification, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Returns the visible notification's text, if any.
    #[must_use]
    pub fn notification_message(&self) -> Option<&str> {
        self.notification()
            .map(|notification| notification.message.as_str())
    }

    /// Returns whether the newest movies request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether a companies retry timer is outstanding.
    #[must_use]
    pub const fn is_companies_retry_pending(&self) -> bool {
        self.companies_retry.is_pending()
    }

    /// Returns whether terminal width calls for the modal form.
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.width < self.settings.compact_width
    }

    /// Returns whether the modal review form is open.
    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.is_compact() && self.form_focused
    }

    /// Returns whether the review form has keyboard focus.
    #[must_use]
    pub const fn is_form_focused(&self) -> bool {
        self.form_focused
    }

    /// Derives where the review flow stands.
    #[must_use]
    pub const fn review_phase(&self) -> ReviewPhase {
        if self.submitting.is_some() {
            ReviewPhase::Submitting
        } else if self.selected_movie_id.is_none() {
            ReviewPhase::NoSelection
        } else if self.form_focused || !self.draft.is_empty() {
            ReviewPhase::Editing
        } else if self.confirmed {
            ReviewPhase::Confirmed
        } else {
            ReviewPhase::Selected
        }
    }

    /// Rebuilds the display order from the movies and the active sort.
    pub(crate) fn rebuild_display_order(&mut self) {
        self.display_order = self.table.sort.sorted_indices(&self.movies);
    }

    /// Id of the movie under the cursor, owned so it survives a rebuild.
    fn cursor_movie_id(&self) -> Option<String> {
        self.cursor_movie().map(|movie| movie.id.clone())
    }

    /// Moves the cursor back onto `id` after the display order changed, or
    /// clamps it if that movie is gone.
    fn restore_cursor(&mut self, id: Option<&str>) {
        let position = id.and_then(|wanted| {
            self.display_order.iter().position(|&index| {
                self.movies
                    .get(index)
                    .is_some_and(|movie| movie.id == wanted)
            })
        });

        if let Some(found) = position {
            self.table.cursor_position = found;
        }
        self.table.clamp_cursor(self.display_order.len());
        self.adjust_scroll_to_cursor();
    }

    /// Applies a message and returns the commands it produced, unbatched.
    ///
    /// [`Self::handle_message`] batches these for the bubbletea-rs runtime;
    /// test drivers call this directly to run each command on its own.
    pub fn dispatch(&mut self, msg: &AppMsg) -> Commands {
        if msg.is_navigation() {
            self.handle_navigation_msg(msg);
            return Commands::new();
        }
        if msg.is_table() {
            return self.handle_table_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_review() {
            return self.handle_review_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands, batched into one.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        batch_commands(self.dispatch(msg))
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
    }

    /// Dispatches lifecycle, notification and window messages.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Commands {
        match msg {
            AppMsg::Quit => self.handle_quit(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                Commands::new()
            }
            AppMsg::NotificationExpired { generation } => {
                self.notifications.expire(*generation);
                Commands::new()
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                Commands::new()
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                Commands::new()
            }
        }
    }

    fn handle_quit(&mut self) -> Commands {
        self.companies_retry.cancel();
        vec![bubbletea_rs::quit()]
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
    }

    /// Shows a notification and returns the timer that dismisses it.
    pub(super) fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> Cmd {
        let generation = self.notifications.show(kind, message);
        Self::arm_notification_expiry(generation, self.settings.notification_ttl)
    }

    /// Creates a command that expires notification `generation` after `ttl`.
    pub(super) fn arm_notification_expiry(generation: u64, ttl: Duration) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(ttl).await;
            Some(Box::new(AppMsg::NotificationExpired { generation }) as Box<dyn Any + Send>)
        })
    }
}

/// Folds commands into at most one for the runtime.
fn batch_commands(mut commands: Commands) -> Option<Cmd> {
    match commands.len() {
        0 => None,
        1 => commands.pop(),
        _ => Some(bubbletea_rs::batch(commands)),
    }
}



#[cfg(test)]
#[path = "review_handlers_tests.rs"]
mod review_handlers_tests;
