//! Review form component.
//!
//! The same form renders two ways: inline below the movie table on wide
//! terminals, or as a boxed modal on narrow ones. Both show the target
//! movie, the draft with a caret when focused, and the character helper.

use crate::tui::state::{ReviewDraft, ReviewPhase};

use super::text_fit::{fit_to_width, tail_to_width};

/// Widest the modal box is allowed to grow.
const MODAL_MAX_WIDTH: usize = 60;
/// Prompt drawn before the draft text.
const PROMPT: &str = "> ";
/// Caret drawn after the draft text while focused.
const CARET: char = '_';

/// Context for rendering the review form.
#[derive(Debug, Clone)]
pub struct ReviewFormViewContext<'a> {
    /// Current draft.
    pub draft: &'a ReviewDraft,
    /// Title of the selected movie, if any.
    pub movie_title: Option<&'a str>,
    /// Where the review flow stands.
    pub phase: ReviewPhase,
    /// Whether the form receives key presses.
    pub focused: bool,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Stateless renderer for the review form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Renders the inline form shown below the table.
    #[must_use]
    pub fn view_inline(ctx: &ReviewFormViewContext<'_>) -> String {
        let width = ctx.max_width.max(1);
        let lines = [
            target_line(ctx),
            input_line(ctx, width),
            ctx.draft.helper_text(),
            action_line(ctx, "w:Submit Review"),
        ];

        let mut output = String::new();
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Renders the modal dialog used on narrow terminals.
    #[must_use]
    pub fn view_modal(ctx: &ReviewFormViewContext<'_>) -> String {
        let outer = ctx.max_width.clamp(8, MODAL_MAX_WIDTH);
        let inner = outer - 4;

        let title = " Submit Review ";
        let top = format!(
            "+-{title}{}+",
            "-".repeat(outer.saturating_sub(title.len() + 3))
        );
        let bottom = format!("+{}+", "-".repeat(outer - 2));
        let body = [
            target_line(ctx),
            input_line(ctx, inner),
            ctx.draft.helper_text(),
            action_line(ctx, "Esc:Cancel  Enter:Submit"),
        ];

        let mut output = top;
        output.push('\n');
        for line in body {
            output.push_str("| ");
            output.push_str(&fit_to_width(&line, inner));
            output.push_str(" |\n");
        }
        output.push_str(&bottom);
        output.push('\n');
        output
    }
}

fn target_line(ctx: &ReviewFormViewContext<'_>) -> String {
    ctx.movie_title.map_or_else(
        || "Review: no movie selected".to_owned(),
        |title| format!("Review for: {title}"),
    )
}

fn input_line(ctx: &ReviewFormViewContext<'_>, width: usize) -> String {
    let caret_width = usize::from(ctx.focused);
    let text_width = width.saturating_sub(PROMPT.len() + caret_width);
    let mut line = format!("{PROMPT}{}", tail_to_width(ctx.draft.text(), text_width));
    if ctx.focused {
        line.push(CARET);
    }
    line
}

fn action_line(ctx: &ReviewFormViewContext<'_>, idle_hint: &str) -> String {
    match ctx.phase {
        ReviewPhase::Submitting => "Submitting review...".to_owned(),
        ReviewPhase::Editing if !ctx.focused => idle_hint.to_owned(),
        ReviewPhase::Editing => "Enter:Submit  Esc:Cancel".to_owned(),
        ReviewPhase::NoSelection | ReviewPhase::Selected | ReviewPhase::Confirmed => {
            idle_hint.to_owned()
        }
    }
}
