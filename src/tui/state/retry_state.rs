//! Cancellable fixed-delay retry bookkeeping.
//!
//! The update loop cannot abort a sleeping command, so cancellation works by
//! generation: every scheduled retry gets a [`RetryTicket`] stamped with the
//! current generation, and anything that should invalidate outstanding
//! timers (a successful fetch, teardown, a manual refresh) bumps the
//! generation. A timer whose ticket no longer matches is ignored when it
//! fires. At most one retry is pending at a time.

/// Handle for a scheduled retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryTicket {
    /// Generation the retry was scheduled under.
    pub generation: u64,
    /// One-based attempt number.
    pub attempt: u32,
}

/// Retry state for one fetch.
#[derive(Debug, Clone, Default)]
pub struct RetryState {
    generation: u64,
    attempts: u32,
    pending: bool,
    limit: Option<u32>,
}

impl RetryState {
    /// Creates retry state with an optional cap on consecutive attempts.
    #[must_use]
    pub const fn new(limit: Option<u32>) -> Self {
        Self {
            generation: 0,
            attempts: 0,
            pending: false,
            limit,
        }
    }

    /// Schedules the next retry after a failure.
    ///
    /// Returns `None` if a retry is already pending or the attempt limit has
    /// been reached.
    pub const fn schedule(&mut self) -> Option<RetryTicket> {
        if self.pending {
            return None;
        }
        if let Some(limit) = self.limit
            && self.attempts >= limit
        {
            return None;
        }

        self.attempts = self.attempts.saturating_add(1);
        self.pending = true;
        Some(RetryTicket {
            generation: self.generation,
            attempt: self.attempts,
        })
    }

    /// Consumes a fired timer.
    ///
    /// Returns `true` if the ticket's generation is current and a retry was
    /// pending, meaning the fetch should run now.
    pub const fn fire(&mut self, generation: u64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    /// Invalidates any pending timer without resetting the attempt count.
    pub const fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }

    /// Invalidates any pending timer and resets the attempt count.
    pub const fn reset(&mut self) {
        self.cancel();
        self.attempts = 0;
    }

    /// Returns true while a retry timer is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the number of consecutive attempts scheduled.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the ticket of the outstanding retry, if any.
    #[must_use]
    pub const fn pending_ticket(&self) -> Option<RetryTicket> {
        if self.pending {
            Some(RetryTicket {
                generation: self.generation,
                attempt: self.attempts,
            })
        } else {
            None
        }
    }
}
