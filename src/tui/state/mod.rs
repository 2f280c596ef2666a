//! State management for the movie listing TUI.
//!
//! This module provides the core state types for sort order and cursor
//! position, the review draft, the transient notification slot and the
//! companies retry timer.

mod notification;
mod retry_state;
mod review_draft;
mod sort_state;

pub use notification::{Notification, NotificationKind, NotificationState};
pub use retry_state::{RetryState, RetryTicket};
pub use review_draft::{
    MAX_REVIEW_LENGTH, MIN_REVIEW_LENGTH, ReviewDraft, ReviewDraftError, ReviewPhase,
};
pub use sort_state::{SortDirection, SortKey, SortState, TableState};
