//! Layout helpers for the movie TUI model.
//!
//! This module encapsulates table height calculations and scroll
//! adjustments based on terminal size and cursor movement.

use super::{
    FOOTER_HEIGHT, HEADER_HEIGHT, INLINE_FORM_HEIGHT, MIN_LIST_HEIGHT, MovieApp,
    TABLE_HEADER_HEIGHT,
};

impl MovieApp {
    /// Rows taken by everything except the table body.
    const fn chrome_height(&self) -> usize {
        let form = if self.is_compact() {
            0
        } else {
            INLINE_FORM_HEIGHT
        };
        HEADER_HEIGHT + TABLE_HEADER_HEIGHT + FOOTER_HEIGHT + form
    }

    /// Calculates the number of body rows available to the table.
    pub(super) fn calculate_list_height(&self) -> usize {
        (self.height as usize)
            .saturating_sub(self.chrome_height())
            .max(MIN_LIST_HEIGHT)
    }

    /// Updates the visible row count stored in the table component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.movie_table.set_visible_height(list_height);
    }

    /// Adjusts scroll offset so the cursor remains visible.
    pub(super) const fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.table.cursor_position;
        let visible_height = self.movie_table.visible_height();

        if visible_height == 0 {
            return;
        }

        if cursor < self.table.scroll_offset {
            self.table.scroll_offset = cursor;
            return;
        }

        let viewport_end = self.table.scroll_offset.saturating_add(visible_height);
        if cursor >= viewport_end {
            self.table.scroll_offset = cursor.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
