//! Configuration settings for Stratdeck.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Enable Unicode symbols.
    pub unicode_symbols: bool,
    /// Height of a strategy card in rows.
    pub card_height: u16,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_support: true,
            unicode_symbols: true,
            card_height: 10,
            show_status_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Navigate left.
    pub left: String,
    /// Navigate right.
    pub right: String,
    /// Select/confirm (open details).
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Switch to discover view.
    pub discover: String,
    /// Switch to details view.
    pub details: String,
    /// Toggle bookmark on the selected strategy.
    pub bookmark: String,
    /// Share the selected strategy.
    pub share: String,
    /// Open the full description modal.
    pub show_more: String,
    /// Deploy with the selected mode.
    pub deploy: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            left: "h".to_string(),
            right: "l".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            discover: "1".to_string(),
            details: "2".to_string(),
            bookmark: "b".to_string(),
            share: "s".to_string(),
            show_more: "m".to_string(),
            deploy: "d".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color (hex).
    pub primary: String,
    /// Gradient start color (hex).
    pub gradient_start: String,
    /// Gradient mid color (hex).
    pub gradient_mid: String,
    /// Gradient end color (hex).
    pub gradient_end: String,
    /// Success color (hex).
    pub success: String,
    /// Warning color (hex).
    pub warning: String,
    /// Error color (hex).
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#5266FC".to_string(),
            gradient_start: "#5367fc".to_string(),
            gradient_mid: "#4d6ff7".to_string(),
            gradient_end: "#00e8b0".to_string(),
            success: "#10b981".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef5350".to_string(),
        }
    }
}
