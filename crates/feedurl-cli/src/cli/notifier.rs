//! Terminal notifier: notifications go to stderr so stdout stays pipeable.

use feedurl_core::panel::{Notification, NotificationKind, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

/// Terminal line for a notification; errors carry a `warning:` prefix.
fn render(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => notification.message.clone(),
        NotificationKind::Error => format!("warning: {}", notification.message),
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::warn!("{}", notification.message),
        }
        eprintln!("{}", render(&notification));
    }
}
