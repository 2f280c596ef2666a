//! Review draft state for the selected movie.
//!
//! The draft is a single bounded string. It is cleared whenever the
//! selection changes, on cancellation, and after a confirmed submission.
//! The character counter and the at-limit warning are derived on demand.

use thiserror::Error;

/// Maximum number of characters a review may contain.
pub const MAX_REVIEW_LENGTH: usize = 100;
/// Minimum number of non-whitespace-trimmed characters required to submit.
pub const MIN_REVIEW_LENGTH: usize = 3;

/// Editable review text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    text: String,
    max_length: usize,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self::new(MAX_REVIEW_LENGTH)
    }
}

impl ReviewDraft {
    /// Creates an empty draft with the given character limit.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        debug_assert!(max_length >= 1, "review draft max_length must be positive");
        Self {
            text: String::new(),
            max_length,
        }
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the configured maximum character count.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the current character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true once the draft holds `max_length` characters.
    #[must_use]
    pub fn is_at_limit(&self) -> bool {
        self.char_count() >= self.max_length
    }

    /// Returns true when the draft holds no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Helper line shown under the review field.
    #[must_use]
    pub fn helper_text(&self) -> String {
        if self.is_at_limit() {
            format!(
                "You reached the maximum characters allowed ({})",
                self.max_length
            )
        } else {
            format!(
                "You've used {} out of {} maximum characters allowed.",
                self.char_count(),
                self.max_length
            )
        }
    }

    /// Appends one character to the draft, enforcing max length.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDraftError::LengthExceeded`] when the draft is already
    /// full; the draft is left unchanged.
    pub fn push_char(&mut self, character: char) -> Result<(), ReviewDraftError> {
        let attempted = self.char_count().saturating_add(1);
        if attempted > self.max_length {
            return Err(ReviewDraftError::LengthExceeded {
                attempted,
                max_length: self.max_length,
            });
        }

        self.text.push(character);
        Ok(())
    }

    /// Removes the last character from the draft, if present.
    pub fn backspace(&mut self) {
        let _removed = self.text.pop();
    }

    /// Clears the draft text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Checks that the draft is long enough to submit.
    ///
    /// Returns the trimmed text on success.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDraftError::TooShort`] when the trimmed text has
    /// fewer than [`MIN_REVIEW_LENGTH`] characters.
    pub fn validate_for_submit(&self) -> Result<&str, ReviewDraftError> {
        let trimmed = self.text.trim();
        if trimmed.chars().count() < MIN_REVIEW_LENGTH {
            return Err(ReviewDraftError::TooShort {
                min_length: MIN_REVIEW_LENGTH,
            });
        }
        Ok(trimmed)
    }
}

/// Errors raised while editing or validating a review draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewDraftError {
    /// The draft text would exceed the character limit.
    #[error("review length {attempted} exceeds limit {max_length}")]
    LengthExceeded {
        /// Character count after the attempted mutation.
        attempted: usize,
        /// Maximum character count.
        max_length: usize,
    },
    /// The trimmed draft is shorter than the submission minimum.
    #[error("You must write at least {min_length} characters.")]
    TooShort {
        /// Minimum number of characters.
        min_length: usize,
    },
    /// Submission was requested without a selected movie.
    #[error("Select a movie before submitting a review.")]
    NoSelection,
}

/// Where the review flow currently stands.
///
/// The phase is derived from app state rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    /// No movie is selected.
    NoSelection,
    /// A movie is selected and the draft is untouched.
    Selected,
    /// The user is writing a review.
    Editing,
    /// A submission is in flight.
    Submitting,
    /// The last submission was confirmed.
    Confirmed,
}

impl ReviewPhase {
    /// Short label for the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoSelection => "no movie selected",
            Self::Selected => "selected",
            Self::Editing => "editing",
            Self::Submitting => "submitting...",
            Self::Confirmed => "submitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{MAX_REVIEW_LENGTH, ReviewDraft, ReviewDraftError};

    fn draft_with(text: &str) -> ReviewDraft {
        let mut draft = ReviewDraft::default();
        for character in text.chars() {
            draft.push_char(character).expect("text fits in draft");
        }
        draft
    }

    #[test]
    fn new_draft_starts_empty() {
        let draft = ReviewDraft::default();

        assert_eq!(draft.text(), "");
        assert_eq!(draft.max_length(), MAX_REVIEW_LENGTH);
        assert!(draft.is_empty());
        assert!(!draft.is_at_limit());
    }

    #[test]
    fn push_char_stops_at_limit() {
        let mut draft = ReviewDraft::new(3);
        assert!(draft.push_char('a').is_ok());
        assert!(draft.push_char('b').is_ok());
        assert!(draft.push_char('c').is_ok());

        let result = draft.push_char('d');

        assert_eq!(
            result,
            Err(ReviewDraftError::LengthExceeded {
                attempted: 4,
                max_length: 3,
            })
        );
        assert_eq!(draft.text(), "abc");
        assert!(draft.is_at_limit());
    }

    #[test]
    fn backspace_and_clear_edit_text() {
        let mut draft = draft_with("hey");

        draft.backspace();
        assert_eq!(draft.text(), "he");

        draft.clear();
        assert!(draft.is_empty());

        draft.backspace();
        assert!(draft.is_empty());
    }

    #[rstest]
    #[case("", "You've used 0 out of 100 maximum characters allowed.")]
    #[case("Great film", "You've used 10 out of 100 maximum characters allowed.")]
    fn helper_text_counts_characters(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(draft_with(text).helper_text(), expected);
    }

    #[test]
    fn helper_text_warns_at_limit() {
        let draft = draft_with(&"x".repeat(MAX_REVIEW_LENGTH));

        assert_eq!(
            draft.helper_text(),
            "You reached the maximum characters allowed (100)"
        );
    }

    #[rstest]
    #[case::two_chars("ok")]
    #[case::padded("  ok  ")]
    #[case::blank("   ")]
    fn short_drafts_fail_validation(#[case] text: &str) {
        let draft = draft_with(text);

        assert_eq!(
            draft.validate_for_submit(),
            Err(ReviewDraftError::TooShort { min_length: 3 })
        );
        assert_eq!(draft.text(), text);
    }

    #[test]
    fn validation_returns_trimmed_text() {
        let draft = draft_with("  Great film ");

        assert_eq!(draft.validate_for_submit(), Ok("Great film"));
    }

    #[rstest]
    #[case("é")]
    #[case("🙂")]
    fn char_count_uses_unicode_scalar_values(#[case] text: &str) {
        assert_eq!(draft_with(text).char_count(), 1);
    }

    #[test]
    fn validation_messages_match_notifications() {
        assert_eq!(
            ReviewDraftError::TooShort { min_length: 3 }.to_string(),
            "You must write at least 3 characters."
        );
        assert_eq!(
            ReviewDraftError::NoSelection.to_string(),
            "Select a movie before submitting a review."
        );
    }
}
