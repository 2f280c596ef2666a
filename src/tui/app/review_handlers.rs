//! Review form and submission handlers for the movie TUI.
//!
//! This module implements keyboard-driven editing of the review draft and
//! its submission through the configured [`ReviewSubmitter`]. Validation
//! failures only raise a notification; they never change the draft or the
//! selection.
//!
//! [`ReviewSubmitter`]: crate::review::ReviewSubmitter

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::{Commands, MovieApp};
use crate::review::SubmissionReceipt;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{NotificationKind, ReviewDraftError};

/// Shown when a submit arrives while another is in flight.
pub(super) const SUBMISSION_IN_FLIGHT: &str = "A review is already being submitted.";
/// Shown when the submitter confirms a review.
pub(super) const SUBMISSION_SUCCEEDED: &str = "Review submitted successfully";

impl MovieApp {
    /// Dispatches review form messages.
    pub(super) fn handle_review_msg(&mut self, msg: &AppMsg) -> Commands {
        match msg {
            AppMsg::OpenReviewForm => {
                self.form_focused = true;
                Commands::new()
            }
            AppMsg::ReviewInsertChar(character) => {
                self.insert_review_character(*character);
                Commands::new()
            }
            AppMsg::ReviewBackspace => {
                if !self.draft_in_flight() {
                    self.draft.backspace();
                    self.confirmed = false;
                }
                Commands::new()
            }
            AppMsg::ReviewSubmit => self.handle_review_submit(),
            AppMsg::ReviewCancel => {
                self.draft.clear();
                self.form_focused = false;
                Commands::new()
            }
            AppMsg::ReviewSubmitted { movie_id, outcome } => {
                self.handle_review_submitted(movie_id, outcome)
            }
            _ => {
                debug_assert!(false, "non-review message routed to handle_review_msg");
                Commands::new()
            }
        }
    }

    /// Whether the draft belongs to the movie whose review is being sent.
    fn draft_in_flight(&self) -> bool {
        self.submitting.is_some() && self.submitting == self.selected_movie_id
    }

    /// Appends a character, silently ignoring input beyond the limit.
    ///
    /// The draft is frozen while its submission is in flight, so the receipt
    /// only ever clears the text that was sent.
    fn insert_review_character(&mut self, character: char) {
        if character.is_control() {
            return;
        }
        if self.draft_in_flight() {
            tracing::debug!("review input ignored during submission");
            return;
        }
        match self.draft.push_char(character) {
            Ok(()) => self.confirmed = false,
            Err(ReviewDraftError::LengthExceeded { max_length, .. }) => {
                tracing::debug!(max_length, "review input ignored at limit");
            }
            Err(error) => {
                tracing::debug!(%error, "review input rejected");
            }
        }
    }

    fn handle_review_submit(&mut self) -> Commands {
        if self.submitting.is_some() {
            return vec![self.notify(NotificationKind::Error, SUBMISSION_IN_FLIGHT)];
        }

        let Some(movie_id) = self.selected_movie_id.clone() else {
            return vec![self.notify(
                NotificationKind::Error,
                ReviewDraftError::NoSelection.to_string(),
            )];
        };

        let text = match self.draft.validate_for_submit().map(str::to_owned) {
            Ok(trimmed) => trimmed,
            Err(error) => return vec![self.notify(NotificationKind::Error, error.to_string())],
        };

        tracing::info!(
            movie_id = movie_id.as_str(),
            chars = text.chars().count(),
            "submitting review"
        );
        self.submitting = Some(movie_id.clone());
        vec![self.submit_review_cmd(movie_id, text)]
    }

    fn submit_review_cmd(&self, movie_id: String, text: String) -> Cmd {
        let submitter = Arc::clone(&self.services.submitter);

        Box::pin(async move {
            let outcome = submitter
                .submit_review(&movie_id, &text)
                .await
                .map_err(|error| error.to_string());
            Some(Box::new(AppMsg::ReviewSubmitted { movie_id, outcome }) as Box<dyn Any + Send>)
        })
    }

    fn handle_review_submitted(
        &mut self,
        movie_id: &str,
        outcome: &Result<SubmissionReceipt, String>,
    ) -> Commands {
        self.submitting = None;

        match outcome {
            Ok(receipt) => {
                tracing::info!(
                    movie_id,
                    chars = receipt.char_count,
                    "review submitted"
                );
                self.services.telemetry.record(TelemetryEvent::ReviewSubmitted {
                    movie_id: movie_id.to_owned(),
                });
                if self.selected_movie_id.as_deref() == Some(movie_id) {
                    self.draft.clear();
                    self.form_focused = false;
                    self.confirmed = true;
                }
                vec![self.notify(NotificationKind::Success, SUBMISSION_SUCCEEDED)]
            }
            Err(detail) => {
                tracing::warn!(movie_id, error = detail.as_str(), "review submission failed");
                vec![self.notify(
                    NotificationKind::Error,
                    format!("Failed to submit review: {detail}"),
                )]
            }
        }
    }
}
