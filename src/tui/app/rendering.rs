//! Rendering logic for the movie TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::MovieApp;
use crate::tui::components::{
    MovieTableViewContext, NotificationBarComponent, ReviewFormComponent, ReviewFormViewContext,
};

impl MovieApp {
    /// Renders the title line with the loading indicator.
    pub(super) fn render_header(&self) -> String {
        let title = "Welcome to Movie database!";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the movie count and active sort.
    pub(super) fn render_totals_bar(&self) -> String {
        let sort = self.table.sort;
        format!(
            "Total movies displaying: {}  Sort: {} {}\n",
            self.movies.len(),
            sort.key.label(),
            sort.direction.glyph()
        )
    }

    /// Renders the table header and visible rows.
    pub(super) fn render_table(&self) -> String {
        let ctx = MovieTableViewContext {
            movies: &self.movies,
            companies: &self.companies,
            display_order: &self.display_order,
            sort: self.table.sort,
            cursor_position: self.table.cursor_position,
            scroll_offset: self.table.scroll_offset,
            visible_height: self.calculate_list_height(),
            selected_id: self.selected_movie_id.as_deref(),
            max_width: self.terminal_width(),
        };
        self.movie_table.view(&ctx)
    }

    fn review_form_context(&self) -> ReviewFormViewContext<'_> {
        ReviewFormViewContext {
            draft: &self.draft,
            movie_title: self.selected_movie().map(|movie| movie.title.as_str()),
            phase: self.review_phase(),
            focused: self.form_focused,
            max_width: self.terminal_width(),
        }
    }

    /// Renders the inline review form, preceded by a blank line.
    pub(super) fn render_inline_form(&self) -> String {
        let mut output = String::from("\n");
        output.push_str(&ReviewFormComponent::view_inline(&self.review_form_context()));
        output
    }

    /// Renders the modal review form.
    pub(super) fn render_modal_form(&self) -> String {
        ReviewFormComponent::view_modal(&self.review_form_context())
    }

    /// Renders the notification line.
    pub(super) fn render_notification(&self) -> String {
        NotificationBarComponent::view(self.notifications.current(), self.terminal_width())
    }

    /// Renders the status bar with key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.form_focused {
            "Enter:submit  Esc:cancel  Backspace:delete"
        } else if self.is_compact() {
            "q:quit  ?:help  j/k:move  Enter:select  w:Submit Review"
        } else {
            "j/k:move  Enter:select  s/t/c:sort  w:review  r:refresh  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down      Move cursor down
  k, Up        Move cursor up
  PgDn         Page down
  PgUp         Page up
  Home, g      Go to first movie
  End, G       Go to last movie

Table:
  Enter, Space Select movie under cursor
  s            Sort by average review (again to reverse)
  t            Sort by title (again to reverse)
  c            Sort by film company (again to reverse)
  r            Refresh movies

Review:
  w            Open or focus the review form
  text keys    Edit review (100 characters max)
  Backspace    Delete one character
  Enter        Submit review
  Esc          Discard review and close form

Other:
  ?            Toggle this help
  q, Ctrl+C    Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    fn terminal_width(&self) -> usize {
        (self.width as usize).max(1)
    }
}
