//! # Stratdeck - Strategy catalog TUI
//!
//! A terminal user interface for browsing a catalog of trading
//! strategies, bookmarking them, and deploying them in forward-test or
//! live-trading mode. Built with ratatui.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Core application state and lifecycle management
//! - **Catalog**: Immutable strategy data model
//! - **State**: Centralized state management (store + actions)
//! - **Events**: Input handling and event processing
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use catalog::{DeployMode, Strategy, StrategyStatus, Tag, TagKind};
pub use config::Config;
pub use error::{Error, Result};
