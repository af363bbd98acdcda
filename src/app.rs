//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::catalog::DeployMode;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Whether mouse capture was enabled at startup.
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mouse_capture = config.ui.mouse_support;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Load the catalog once; strategies are immutable afterwards.
        let strategies = crate::catalog::load_default()?;
        tracing::info!(count = strategies.len(), "catalog loaded");

        let store = Store::new(action_tx.clone(), strategies, &config);
        let event_handler = EventHandler::new(action_tx, config.keybindings.clone());

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            mouse_capture,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            let mut screen = ratatui::layout::Rect::default();
            self.terminal.draw(|frame| {
                screen = frame.area();
                Ui::render(frame, &self.store);
            })?;
            self.event_handler.set_screen_area(screen);

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action)?;
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action)?;
                }
            }

            // Expire stale notifications
            if self.store.app.notification_expired() {
                self.store.reduce(Action::DismissNotification);
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    ///
    /// Actions with side effects are intercepted here; everything else
    /// goes straight to the reducer.
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Deploy => self.deploy_selected()?,
            Action::ShareStrategy(id) => {
                self.on_share(&id);
                self.store.dispatch(Action::ShowNotification(Notification::info(
                    "Share link requested",
                )))?;
            }
            Action::ViewStrategy(id) => {
                self.on_view(&id);
                self.store.reduce(Action::ViewStrategy(id));
            }
            other => self.store.reduce(other),
        }

        Ok(())
    }

    /// Commit the currently selected deploy mode for the selected strategy.
    fn deploy_selected(&mut self) -> Result<()> {
        let Some(strategy) = self.store.catalog.selected_strategy() else {
            self.store.reduce(Action::SetError(
                "No strategy selected to deploy".to_string(),
            ));
            return Ok(());
        };

        let mode = self.store.deploy.mode;
        let id = strategy.id.clone();
        let name = strategy.name.clone();
        self.on_deploy(mode, &id);

        let message = match mode {
            DeployMode::ForwardTest => format!("{name} deployed in forward-test mode"),
            DeployMode::LiveTrading => format!("{name} deployed in live-trading mode"),
        };
        self.store
            .dispatch(Action::ShowNotification(Notification::success(message)))
    }

    // The collaborators below are stubs: a production build would route
    // these to an order-routing backend, a sharing surface, and a
    // navigation layer respectively.

    fn on_deploy(&self, mode: DeployMode, strategy_id: &str) {
        tracing::info!(%strategy_id, %mode, "deploy requested");
    }

    fn on_share(&self, strategy_id: &str) {
        tracing::info!(%strategy_id, "share requested");
    }

    fn on_view(&self, strategy_id: &str) {
        tracing::info!(%strategy_id, "view requested");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        if self.mouse_capture {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = self.terminal.show_cursor();
    }
}
