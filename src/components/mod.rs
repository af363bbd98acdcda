//! Reusable UI components.
//!
//! This module re-exports the public UI types for convenience.

pub use crate::ui::{
    DeploySection, HelpPanel, Layout, StatusBar, StrategyCard, StrategyDetails, StrategyList,
    StrategyModal, TabBar,
};
