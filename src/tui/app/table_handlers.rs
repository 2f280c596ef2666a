//! Sorting and row selection handlers.

use super::{Commands, MovieApp};
use crate::tui::messages::AppMsg;
use crate::tui::state::SortKey;

impl MovieApp {
    /// Dispatches table messages to their handlers.
    pub(super) fn handle_table_msg(&mut self, msg: &AppMsg) -> Commands {
        match msg {
            AppMsg::SelectCursorRow => self.handle_select_cursor_row(),
            AppMsg::SortBy(key) => self.handle_sort_by(*key),
            _ => {
                debug_assert!(false, "non-table message routed to handle_table_msg");
            }
        }
        Commands::new()
    }

    /// Selects the movie under the cursor.
    ///
    /// Selection always starts a fresh draft, even when the same row is
    /// selected again.
    fn handle_select_cursor_row(&mut self) {
        let Some(id) = self.cursor_movie_id() else {
            return;
        };

        tracing::debug!(movie_id = id.as_str(), "movie selected");
        self.selected_movie_id = Some(id);
        self.draft.clear();
        self.confirmed = false;
    }

    /// Re-sorts the table, keeping the cursor on the same movie.
    fn handle_sort_by(&mut self, key: SortKey) {
        let cursor_id = self.cursor_movie_id();
        self.table.sort.select(key);
        self.rebuild_display_order();
        self.restore_cursor(cursor_id.as_deref());
    }

    /// Drops the selection together with its draft and form focus.
    pub(super) fn clear_selection(&mut self) {
        self.selected_movie_id = None;
        self.draft.clear();
        self.form_focused = false;
        self.confirmed = false;
    }
}
