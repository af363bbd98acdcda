//! Application-level state.

use super::Notification;
use std::time::Instant;

/// The current view/screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The strategy catalog.
    #[default]
    Discover,
    /// Single-strategy details with the deploy section.
    Details,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// When the current notification was shown.
    pub notification_since: Option<Instant>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Show a notification, restarting its display timer.
    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.notification_since = Some(Instant::now());
    }

    /// Dismiss the current notification.
    pub fn clear_notification(&mut self) {
        self.notification = None;
        self.notification_since = None;
    }

    /// Whether the current notification has outlived its display duration.
    pub fn notification_expired(&self) -> bool {
        match (&self.notification, self.notification_since) {
            (Some(notification), Some(since)) => {
                since.elapsed().as_secs() >= notification.duration_secs
            }
            _ => false,
        }
    }
}
