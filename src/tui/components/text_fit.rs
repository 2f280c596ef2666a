//! Display-width helpers for fixed-width table cells and form fields.
//!
//! Widths are measured in terminal columns using `unicode-width`, so wide
//! characters (CJK, emoji) occupy two columns and combining marks none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Pads or truncates `text` to exactly `width` columns.
///
/// Truncated text ends with `...` when the cell is wide enough to hold it.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut output = text.to_owned();
        output.push_str(&" ".repeat(width - text_width));
        return output;
    }

    let (budget, suffix) = if width > ELLIPSIS.len() {
        (width - ELLIPSIS.len(), ELLIPSIS)
    } else {
        (width, "")
    };

    let mut output = take_prefix(text, budget);
    output.push_str(suffix);
    let used = UnicodeWidthStr::width(output.as_str());
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}

/// Returns the longest suffix of `text` that fits in `width` columns.
///
/// Used for single-line input fields, which keep the end of the text (where
/// the caret is) in view.
pub(crate) fn tail_to_width(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    let mut start = text.len();

    for (index, ch) in text.char_indices().rev() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        used = used.saturating_add(char_width);
        start = index;
    }

    text.get(start..).unwrap_or_default()
}

fn take_prefix(text: &str, width: usize) -> String {
    let mut output = String::new();
    let mut used = 0usize;

    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    output
}
