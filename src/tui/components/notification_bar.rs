//! One-line notification renderer.

use crate::tui::state::{Notification, NotificationKind};

use super::text_fit::fit_to_width;

/// Renders the transient notification line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationBarComponent;

impl NotificationBarComponent {
    /// Renders `notification` fitted to `max_width`, or an empty line.
    #[must_use]
    pub fn view(notification: Option<&Notification>, max_width: usize) -> String {
        let Some(notification) = notification else {
            return "\n".to_owned();
        };

        let tag = match notification.kind {
            NotificationKind::Error => "[error]",
            NotificationKind::Success => "[ok]",
        };
        let line = format!("{tag} {}", notification.message);
        let mut output = fit_to_width(&line, max_width).trim_end().to_owned();
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::NotificationBarComponent;
    use crate::tui::state::{Notification, NotificationKind};

    #[rstest]
    #[case(NotificationKind::Error, "[error] Failed to fetch movies: boom\n")]
    #[case(NotificationKind::Success, "[ok] Failed to fetch movies: boom\n")]
    fn tags_reflect_kind(#[case] kind: NotificationKind, #[case] expected: &str) {
        let notification = Notification {
            kind,
            message: "Failed to fetch movies: boom".to_owned(),
        };

        assert_eq!(
            NotificationBarComponent::view(Some(&notification), 80),
            expected
        );
    }

    #[test]
    fn absent_notification_renders_blank_line() {
        assert_eq!(NotificationBarComponent::view(None, 80), "\n");
    }
}
