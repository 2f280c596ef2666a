//! Review submission seam.
//!
//! The TUI hands a validated review to a [`ReviewSubmitter`] and waits for
//! its outcome. The shipped implementation, [`SimulatedReviewSubmitter`],
//! makes no network call: it waits a fixed delay and reports success. A
//! real transport only needs to implement the trait.

mod submitter;

pub use submitter::{
    ReviewSubmissionError, ReviewSubmitter, SimulatedReviewSubmitter, SubmissionReceipt,
};

#[cfg(test)]
pub use submitter::MockReviewSubmitter;
