//! Submitter contract and the simulated implementation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Default latency of the simulated submitter.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Acknowledgement returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Movie the review was submitted for.
    pub movie_id: String,
    /// Number of characters accepted.
    pub char_count: usize,
}

/// Errors raised by review submitters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewSubmissionError {
    /// The receiving service refused the review.
    #[error("review was rejected: {message}")]
    Rejected {
        /// Reason given by the receiver.
        message: String,
    },
    /// The review could not be delivered.
    #[error("review could not be delivered: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },
}

/// Capability to submit a review for a movie.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSubmitter: Send + Sync {
    /// Submit `text` as a review of `movie_id`.
    async fn submit_review(
        &self,
        movie_id: &str,
        text: &str,
    ) -> Result<SubmissionReceipt, ReviewSubmissionError>;
}

/// Submitter that waits a fixed delay and then reports success.
///
/// Submitted text is discarded; nothing is persisted or sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedReviewSubmitter {
    delay: Duration,
}

impl SimulatedReviewSubmitter {
    /// Creates a simulated submitter with the given latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedReviewSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl ReviewSubmitter for SimulatedReviewSubmitter {
    async fn submit_review(
        &self,
        movie_id: &str,
        text: &str,
    ) -> Result<SubmissionReceipt, ReviewSubmissionError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(movie_id, "simulated review submission accepted");
        Ok(SubmissionReceipt {
            movie_id: movie_id.to_owned(),
            char_count: text.chars().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ReviewSubmitter, SimulatedReviewSubmitter, SubmissionReceipt};

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_succeeds_after_delay() {
        let submitter = SimulatedReviewSubmitter::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let receipt = submitter
            .submit_review("1", "Great film")
            .await
            .expect("simulated submission always succeeds");

        assert_eq!(started.elapsed(), Duration::from_millis(1000));
        assert_eq!(
            receipt,
            SubmissionReceipt {
                movie_id: "1".to_owned(),
                char_count: 10,
            }
        );
    }

    #[test]
    fn default_delay_is_one_second() {
        assert_eq!(
            SimulatedReviewSubmitter::default().delay(),
            Duration::from_millis(1000)
        );
    }
}
