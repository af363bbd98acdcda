//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod theme;
mod widgets;

pub use layout::Layout;
pub use theme::Theme;
pub use widgets::{
    DeploySection, HelpPanel, ModalHit, StatusBar, StrategyCard, StrategyDetails, StrategyList,
    StrategyModal, TabBar,
};

use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        if store.ui.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }

        TabBar::render(frame, layout.tab_area, store);

        match store.app.current_view {
            View::Discover => StrategyList::render(frame, layout.main_area, store),
            View::Details => StrategyDetails::render(frame, layout.main_area, store),
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }

        // The modal has no presence at all while closed.
        if store.modal.open {
            StrategyModal::render(frame, frame.area(), store);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification, &store.theme);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, &store.theme);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{Frame, Terminal, backend::TestBackend};

    /// Render a frame into a test backend and return the buffer as text.
    pub(crate) fn render_text(
        width: u16,
        height: u16,
        draw: impl FnOnce(&mut Frame),
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
