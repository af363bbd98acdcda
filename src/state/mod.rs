//! State management for Stratdeck.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern: widgets render from the store, user intents become
//! actions, and `Store::reduce` is the only writer.

mod app_state;
mod catalog_state;
mod deploy_state;
mod modal_state;

pub use app_state::{AppState, View};
pub use catalog_state::CatalogState;
pub use deploy_state::DeployState;
pub use modal_state::ModalState;

use crate::catalog::{DeployMode, Strategy};
use crate::config::{Config, UiConfig};
use crate::error::Result;
use crate::ui::Theme;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),

    // Catalog actions
    ToggleBookmark(String),
    ShareStrategy(String),
    ViewStrategy(String),

    // Modal actions
    ShowMore(String),
    CloseModal,

    // Deploy actions
    SelectDeployMode(DeployMode),
    Deploy,

    // UI actions
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Error handling
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Catalog state.
    pub catalog: CatalogState,
    /// Modal state.
    pub modal: ModalState,
    /// Deploy selection state.
    pub deploy: DeployState,
    /// Resolved color theme.
    pub theme: Theme,
    /// UI configuration.
    pub ui: UiConfig,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store over a loaded catalog.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        strategies: Vec<Strategy>,
        config: &Config,
    ) -> Self {
        Self {
            app: AppState::default(),
            catalog: CatalogState::with_strategies(strategies),
            modal: ModalState::default(),
            deploy: DeployState::default(),
            theme: Theme::from_config(&config.theme),
            ui: config.ui.clone(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Title for the modal: the subject's name, empty when there is none.
    pub fn modal_title(&self) -> &str {
        self.modal
            .subject
            .as_deref()
            .and_then(|id| self.catalog.by_id(id))
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }

    /// Body for the modal: full description, falling back to the short
    /// description, empty when there is no subject.
    pub fn modal_body(&self) -> &str {
        self.modal
            .subject
            .as_deref()
            .and_then(|id| self.catalog.by_id(id))
            .map(|s| s.detail_text())
            .unwrap_or("")
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,

            // Catalog actions
            Action::ToggleBookmark(id) => self.catalog.toggle_bookmark(&id),
            // Side effects happen at the app layer; navigation is state.
            Action::ViewStrategy(_) => self.app.current_view = View::Details,
            Action::ShareStrategy(_) => {}

            // Modal actions
            Action::ShowMore(id) => self.modal.open_for(id),
            Action::CloseModal => self.modal.close(),

            // Deploy actions
            Action::SelectDeployMode(mode) => self.deploy.mode = mode,
            // Deploy is handled at the app layer; selection is untouched.
            Action::Deploy => {}

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.set_notification(notification);
            }
            Action::DismissNotification => self.app.clear_notification(),

            // Error handling
            Action::SetError(error) => self.app.error = Some(error),
            Action::ClearError => self.app.error = None,

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }

    fn scroll(&mut self, delta: i32) {
        if self.app.current_view == View::Discover {
            self.catalog.move_selection(delta);
        }
    }

    fn go_to_top(&mut self) {
        if self.app.current_view == View::Discover {
            self.catalog.select_first();
        }
    }

    fn go_to_bottom(&mut self) {
        if self.app.current_view == View::Discover {
            self.catalog.select_last();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::tests::strategy;
    use pretty_assertions::assert_eq;

    /// Build a store over the given strategies; the receiver half of the
    /// action channel is dropped since reduce-level tests never dispatch.
    pub(crate) fn test_store(strategies: Vec<Strategy>) -> Store {
        let (action_tx, _action_rx) = mpsc::unbounded_channel();
        Store::new(action_tx, strategies, &Config::default())
    }

    #[test]
    fn bookmark_toggle_round_trips_through_reduce() {
        let mut store = test_store(vec![strategy("1"), strategy("2")]);

        store.reduce(Action::ToggleBookmark("1".to_string()));
        assert!(store.catalog.is_bookmarked("1"));

        store.reduce(Action::ToggleBookmark("1".to_string()));
        assert!(!store.catalog.is_bookmarked("1"));
    }

    #[test]
    fn show_more_opens_modal_for_subject() {
        let mut store = test_store(vec![strategy("1"), strategy("2")]);
        store.reduce(Action::ShowMore("2".to_string()));
        assert!(store.modal.open);
        assert_eq!(store.modal_title(), "Strategy 2");
    }

    #[test]
    fn modal_body_prefers_full_description() {
        let mut long = strategy("1");
        long.full_description = Some("The full story.".to_string());
        let mut store = test_store(vec![long, strategy("2")]);

        store.reduce(Action::ShowMore("1".to_string()));
        assert_eq!(store.modal_body(), "The full story.");

        store.reduce(Action::CloseModal);
        store.reduce(Action::ShowMore("2".to_string()));
        assert_eq!(store.modal_body(), "A neutral options strategy.");
    }

    #[test]
    fn modal_text_is_empty_without_subject() {
        let store = test_store(vec![strategy("1")]);
        assert_eq!(store.modal_title(), "");
        assert_eq!(store.modal_body(), "");
    }

    #[test]
    fn view_strategy_navigates_to_details() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::ViewStrategy("1".to_string()));
        assert_eq!(store.app.current_view, View::Details);
    }

    #[test]
    fn selecting_a_deploy_mode_has_no_other_effect() {
        let mut store = test_store(vec![strategy("1")]);
        store.reduce(Action::SelectDeployMode(DeployMode::LiveTrading));
        assert_eq!(store.deploy.mode, DeployMode::LiveTrading);
        assert!(store.app.notification.is_none());
        assert!(!store.modal.open);
    }

    #[test]
    fn scroll_only_moves_selection_in_discover() {
        let mut store = test_store(vec![strategy("1"), strategy("2")]);
        store.reduce(Action::SetView(View::Details));
        store.reduce(Action::ScrollDown);
        assert_eq!(store.catalog.selected_index, Some(0));

        store.reduce(Action::SetView(View::Discover));
        store.reduce(Action::ScrollDown);
        assert_eq!(store.catalog.selected_index, Some(1));
    }
}
