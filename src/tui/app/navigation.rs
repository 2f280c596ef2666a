//! Navigation handlers and cursor management.
//!
//! Each handler moves the cursor within the display order and then adjusts
//! scrolling so the cursor remains in the visible window. Moving the cursor
//! never changes the selection.

use super::MovieApp;

impl MovieApp {
    fn set_cursor(&mut self, position: usize) {
        self.table.cursor_position = position;
        self.adjust_scroll_to_cursor();
    }

    fn move_cursor_up(&mut self, step: usize) {
        let new_pos = self.table.cursor_position.saturating_sub(step);
        self.set_cursor(new_pos);
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.display_order.len().saturating_sub(1);
        let new_pos = self
            .table
            .cursor_position
            .saturating_add(step)
            .min(max_index);
        self.set_cursor(new_pos);
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) {
        self.move_cursor_up(1);
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) {
        self.move_cursor_down(1);
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) {
        let page_size = self.movie_table.visible_height().max(1);
        self.move_cursor_up(page_size);
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) {
        let page_size = self.movie_table.visible_height().max(1);
        self.move_cursor_down(page_size);
    }

    /// Handles Home key navigation.
    pub(super) fn handle_home(&mut self) {
        self.table.scroll_offset = 0;
        self.set_cursor(0);
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) {
        let max_index = self.display_order.len().saturating_sub(1);
        self.set_cursor(max_index);
    }
}
