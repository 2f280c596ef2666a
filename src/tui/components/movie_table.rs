//! Movie table component.
//!
//! Renders the sorted movie list as three columns (title, average review,
//! film company) with a header row carrying the sort glyph. The cursor row
//! is marked `>` and the selected movie `*`.

use crate::catalogue::{Movie, MovieCompany, company_name, format_average};
use crate::tui::state::{SortKey, SortState};

use super::text_fit::fit_to_width;

/// Default visible height for the movie table body.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;
/// Width of the average review column ("Average Review ↑").
const AVERAGE_COLUMN_WIDTH: usize = 16;
/// Width of the cursor and selection marker gutter.
const MARKER_WIDTH: usize = 2;
/// Spaces between columns.
const COLUMN_GAP: &str = "  ";

/// Context for rendering the movie table.
///
/// Borrows everything from the application model so a frame needs no
/// copies of the movie list.
#[derive(Debug, Clone)]
pub struct MovieTableViewContext<'a> {
    /// Movies in source order.
    pub movies: &'a [Movie],
    /// Known movie companies, used to resolve names.
    pub companies: &'a [MovieCompany],
    /// Display order as indices into `movies`.
    pub display_order: &'a [usize],
    /// Active sort, for header glyphs.
    pub sort: SortState,
    /// Cursor position within the display order.
    pub cursor_position: usize,
    /// Number of rows scrolled from the top.
    pub scroll_offset: usize,
    /// Body rows available.
    pub visible_height: usize,
    /// Id of the selected movie, if any.
    pub selected_id: Option<&'a str>,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Column widths derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    title: usize,
    company: usize,
}

impl ColumnWidths {
    fn for_width(max_width: usize) -> Self {
        let fixed = MARKER_WIDTH + AVERAGE_COLUMN_WIDTH + 2 * COLUMN_GAP.len();
        let flexible = max_width.saturating_sub(fixed);
        let title = flexible.div_ceil(2);
        Self {
            title,
            company: flexible - title,
        }
    }
}

/// Component for displaying the movie table.
#[derive(Debug, Clone)]
pub struct MovieTableComponent {
    visible_height: usize,
}

impl Default for MovieTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieTableComponent {
    /// Creates a new movie table component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible body height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible body height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the header row and the visible window of body rows.
    #[must_use]
    pub fn view(&self, ctx: &MovieTableViewContext<'_>) -> String {
        let widths = ColumnWidths::for_width(ctx.max_width);
        let mut output = Self::format_header(ctx.sort, widths);
        output.push('\n');

        if ctx.display_order.is_empty() {
            output.push_str("  No movies to display.\n");
            return output;
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        for (display_index, &movie_index) in ctx
            .display_order
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let Some(movie) = ctx.movies.get(movie_index) else {
                continue;
            };
            let is_cursor = display_index == ctx.cursor_position;
            let is_selected = ctx.selected_id == Some(movie.id.as_str());
            output.push_str(&Self::format_row(
                movie,
                ctx.companies,
                is_cursor,
                is_selected,
                widths,
            ));
            output.push('\n');
        }

        output
    }

    fn format_header(sort: SortState, widths: ColumnWidths) -> String {
        let label = |key: SortKey| {
            sort.indicator_for(key).map_or_else(
                || key.label().to_owned(),
                |glyph| format!("{} {glyph}", key.label()),
            )
        };

        format!(
            "{}{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
            " ".repeat(MARKER_WIDTH),
            fit_to_width(&label(SortKey::Title), widths.title),
            fit_to_width(&label(SortKey::Reviews), AVERAGE_COLUMN_WIDTH),
            fit_to_width(&label(SortKey::FilmCompanyId), widths.company),
        )
    }

    fn format_row(
        movie: &Movie,
        companies: &[MovieCompany],
        is_cursor: bool,
        is_selected: bool,
        widths: ColumnWidths,
    ) -> String {
        let cursor = if is_cursor { '>' } else { ' ' };
        let selected = if is_selected { '*' } else { ' ' };
        let company = company_name(companies, &movie.film_company_id).unwrap_or_default();

        format!(
            "{cursor}{selected}{}{COLUMN_GAP}{}{COLUMN_GAP}{}",
            fit_to_width(&movie.title, widths.title),
            fit_to_width(&format_average(movie.average_score()), AVERAGE_COLUMN_WIDTH),
            fit_to_width(company, widths.company),
        )
    }
}
