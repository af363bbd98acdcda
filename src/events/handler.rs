//! Event handler for processing input events.

use crate::catalog::DeployMode;
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Store, View};
use crate::ui::{ModalHit, StrategyModal};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;
use tokio::sync::mpsc;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Action sender (for future async dispatch).
    #[allow(dead_code)]
    action_tx: mpsc::UnboundedSender<Action>,
    /// Key bindings.
    keybindings: KeyBindings,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
    /// Last rendered screen area, for mouse hit-testing.
    screen_area: Rect,
}

/// Snapshot of relevant store state for event handling.
#[derive(Clone)]
struct StoreSnapshot {
    current_view: View,
    modal_open: bool,
    show_help: bool,
    notification_present: bool,
    error_present: bool,
    deploy_mode: DeployMode,
    selected_id: Option<String>,
    selected_needs_show_more: bool,
}

impl EventHandler {
    /// Create a new event handler with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, keybindings: KeyBindings) -> Self {
        Self {
            action_tx,
            keybindings,
            store_snapshot: None,
            screen_area: Rect::default(),
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        let selected = store.catalog.selected_strategy();
        self.store_snapshot = Some(StoreSnapshot {
            current_view: store.app.current_view,
            modal_open: store.modal.open,
            show_help: store.app.show_help,
            notification_present: store.app.notification.is_some(),
            error_present: store.app.error.is_some(),
            deploy_mode: store.deploy.mode,
            selected_id: selected.map(|s| s.id.clone()),
            selected_needs_show_more: selected.map(|s| s.needs_show_more()).unwrap_or(false),
        });
    }

    /// Record the screen area of the last rendered frame.
    pub fn set_screen_area(&mut self, area: Rect) {
        self.screen_area = area;
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;

        // The modal owns the keyboard while open: Escape closes it, quit
        // still works, everything else is swallowed.
        if snapshot.modal_open {
            return self.handle_modal_keys(key);
        }

        self.handle_normal_mode(key, snapshot)
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        let snapshot = self.store_snapshot.as_ref()?;

        if snapshot.modal_open {
            // Clicks on the backdrop or the close button dismiss the modal;
            // clicks on the content do not propagate to the backdrop.
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                let popup = StrategyModal::popup_area(self.screen_area);
                return match StrategyModal::hit_test(popup, mouse.column, mouse.row) {
                    ModalHit::Backdrop | ModalHit::CloseButton => Some(Action::CloseModal),
                    ModalHit::Content => None,
                };
            }
            return None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_modal_keys(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);

        if input.matches(&self.keybindings.back) {
            return Some(Action::CloseModal);
        }
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }

        None
    }

    fn handle_normal_mode(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }

        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }

        // Escape walks back: error, notification, help overlay, details view.
        if input.matches(&self.keybindings.back) {
            if snapshot.error_present {
                return Some(Action::ClearError);
            }
            if snapshot.notification_present {
                return Some(Action::DismissNotification);
            }
            if snapshot.show_help {
                return Some(Action::ToggleHelp);
            }
            if snapshot.current_view == View::Details {
                return Some(Action::SetView(View::Discover));
            }
            return None;
        }

        // View switching
        if input.matches(&self.keybindings.discover) {
            return Some(Action::SetView(View::Discover));
        }
        if input.matches(&self.keybindings.details) {
            return Some(Action::SetView(View::Details));
        }

        // Navigation
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        if key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if key.code == KeyCode::End {
            return Some(Action::GoToBottom);
        }

        // View-specific actions
        match snapshot.current_view {
            View::Discover => self.handle_discover_view(key, snapshot),
            View::Details => self.handle_details_view(key, snapshot),
        }
    }

    fn handle_discover_view(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);
        let selected_id = snapshot.selected_id.as_ref()?;

        if input.matches(&self.keybindings.bookmark) {
            return Some(Action::ToggleBookmark(selected_id.clone()));
        }

        if input.matches(&self.keybindings.share) {
            return Some(Action::ShareStrategy(selected_id.clone()));
        }

        if input.matches(&self.keybindings.select) {
            return Some(Action::ViewStrategy(selected_id.clone()));
        }

        // Show-more only exists for cards with a collapsed description.
        if input.matches(&self.keybindings.show_more) && snapshot.selected_needs_show_more {
            return Some(Action::ShowMore(selected_id.clone()));
        }

        None
    }

    fn handle_details_view(&self, key: KeyEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let input = super::InputEvent::from(key);

        let toggle = input.matches(&self.keybindings.left)
            || input.matches(&self.keybindings.right)
            || matches!(key.code, KeyCode::Left | KeyCode::Right | KeyCode::Tab);
        if toggle {
            return Some(Action::SelectDeployMode(snapshot.deploy_mode.toggled()));
        }

        if input.matches(&self.keybindings.deploy) {
            return Some(Action::Deploy);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use crate::state::tests::test_store;
    use crossterm::event::KeyModifiers;

    fn handler_for(store: &Store) -> EventHandler {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        let mut handler = EventHandler::new(action_tx, KeyBindings::default());
        handler.update_store_snapshot(store);
        handler.set_screen_area(Rect::new(0, 0, 100, 40));
        handler
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn escape_closes_an_open_modal() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::ShowMore("1".to_string()));
        let handler = handler_for(&store);

        let action = handler.handle_key(press(KeyCode::Esc));
        assert!(matches!(action, Some(Action::CloseModal)));
    }

    #[test]
    fn escape_without_modal_does_not_emit_close() {
        let store = test_store(vec![strategy("1")]);
        let handler = handler_for(&store);

        let action = handler.handle_key(press(KeyCode::Esc));
        assert!(!matches!(action, Some(Action::CloseModal)));
    }

    #[test]
    fn modal_swallows_unrelated_keys() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::ShowMore("1".to_string()));
        let handler = handler_for(&store);

        assert!(handler.handle_key(press(KeyCode::Char('b'))).is_none());
        assert!(handler.handle_key(press(KeyCode::Enter)).is_none());
    }

    #[test]
    fn backdrop_click_closes_modal_but_content_click_does_not() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::ShowMore("1".to_string()));
        let handler = handler_for(&store);

        let popup = StrategyModal::popup_area(Rect::new(0, 0, 100, 40));

        // Top-left corner of the screen is backdrop.
        let action = handler.handle_mouse(click(0, 0));
        assert!(matches!(action, Some(Action::CloseModal)));

        // Center of the popup is content.
        let center = (popup.x + popup.width / 2, popup.y + popup.height / 2);
        assert!(handler.handle_mouse(click(center.0, center.1)).is_none());
    }

    #[test]
    fn close_button_click_closes_modal() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::ShowMore("1".to_string()));
        let handler = handler_for(&store);

        let popup = StrategyModal::popup_area(Rect::new(0, 0, 100, 40));
        let action = handler.handle_mouse(click(popup.right() - 2, popup.y));
        assert!(matches!(action, Some(Action::CloseModal)));
    }

    #[test]
    fn show_more_is_gated_on_description_length() {
        let mut store = test_store(vec![strategy("1")]);
        let handler = handler_for(&store);
        assert!(handler.handle_key(press(KeyCode::Char('m'))).is_none());

        store.catalog.strategies[0].description = "x".repeat(250);
        let handler = handler_for(&store);
        let action = handler.handle_key(press(KeyCode::Char('m')));
        assert!(matches!(action, Some(Action::ShowMore(id)) if id == "1"));
    }

    #[test]
    fn bookmark_key_targets_the_selected_strategy() {
        let mut store = test_store(vec![strategy("1"), strategy("2")]);
        store.reduce(Action::ScrollDown);
        let handler = handler_for(&store);

        let action = handler.handle_key(press(KeyCode::Char('b')));
        assert!(matches!(action, Some(Action::ToggleBookmark(id)) if id == "2"));
    }

    #[test]
    fn details_view_toggles_deploy_mode() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::SetView(View::Details));
        let handler = handler_for(&store);

        let action = handler.handle_key(press(KeyCode::Tab));
        assert!(matches!(
            action,
            Some(Action::SelectDeployMode(DeployMode::LiveTrading))
        ));
    }

    #[test]
    fn deploy_key_emits_a_single_commit_action() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::SetView(View::Details));
        let handler = handler_for(&store);

        let action = handler.handle_key(press(KeyCode::Char('d')));
        assert!(matches!(action, Some(Action::Deploy)));
    }
}
