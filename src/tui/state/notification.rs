//! Single-slot transient notification channel.
//!
//! Only the most recent message is kept. Each message is stamped with a
//! generation number; the auto-dismiss timer carries that number and only
//! clears the slot if no newer message has replaced it in the meantime.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Something failed.
    Error,
    /// An action completed.
    Success,
}

/// A message shown on the notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity of the message.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

/// Holds the visible notification and its generation.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationState {
    /// Replaces the visible notification and returns its generation.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Notification {
            kind,
            message: message.into(),
        });
        self.generation
    }

    /// Clears the notification if `generation` is still the visible one.
    ///
    /// Returns `true` when the notification was dismissed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Returns the visible notification, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns the generation of the latest notification.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
