//! Sort and cursor state for the movie table.
//!
//! The table never reorders the movie list itself. Instead it derives a
//! display order (a vector of indices into the source list) from the active
//! [`SortKey`] and [`SortDirection`]. The cursor and scroll offset refer to
//! positions within that display order.

use std::cmp::Ordering;

use crate::catalogue::Movie;

/// Column the table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Average review score.
    #[default]
    Reviews,
    /// Movie title, lexicographic.
    Title,
    /// Film company identifier, lexicographic.
    FilmCompanyId,
}

impl SortKey {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Average Review",
            Self::Title => "Title",
            Self::FilmCompanyId => "Film Company",
        }
    }
}

/// Ordering direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow glyph shown next to the active column header.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Ascending => '↑',
            Self::Descending => '↓',
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Column the table is ordered by.
    pub key: SortKey,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortState {
    /// Activates a column.
    ///
    /// Choosing the active column toggles its direction; choosing another
    /// column makes it active in ascending order.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Returns the direction glyph if `key` is the active column.
    #[must_use]
    pub fn indicator_for(&self, key: SortKey) -> Option<char> {
        (self.key == key).then(|| self.direction.glyph())
    }

    /// Derives the display order for `movies` without mutating them.
    ///
    /// The sort is stable: movies that compare equal keep their relative
    /// order from the source list, in both directions. Unrated movies (whose
    /// average is `NaN`) always follow rated ones.
    #[must_use]
    pub fn sorted_indices(&self, movies: &[Movie]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..movies.len()).collect();
        order.sort_by(|&left, &right| match (movies.get(left), movies.get(right)) {
            (Some(a), Some(b)) => self.compare(a, b),
            _ => Ordering::Equal,
        });
        order
    }

    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        match self.key {
            SortKey::Reviews => compare_averages(a, b, self.direction),
            SortKey::Title => self.direction.apply(a.title.cmp(&b.title)),
            SortKey::FilmCompanyId => self
                .direction
                .apply(a.film_company_id.cmp(&b.film_company_id)),
        }
    }
}

fn compare_averages(a: &Movie, b: &Movie, direction: SortDirection) -> Ordering {
    match (a.is_rated(), b.is_rated()) {
        (true, true) => direction.apply(a.average_score().total_cmp(&b.average_score())),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Cursor and scroll position within the display order.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Active sort column and direction.
    pub sort: SortState,
    /// Current cursor position (0-indexed) within the display order.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (rows scrolled from top).
    pub scroll_offset: usize,
}

impl TableState {
    /// Creates a table state with default ordering and the cursor at the top.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }
}
