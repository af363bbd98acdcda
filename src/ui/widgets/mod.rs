//! TUI widgets.

mod deploy_section;
mod help;
mod notifications;
mod status_bar;
mod strategy_card;
mod strategy_details;
mod strategy_list;
mod strategy_modal;
mod tab_bar;

pub use deploy_section::DeploySection;
pub use help::HelpPanel;
pub use notifications::{render_error, render_notification};
pub use status_bar::StatusBar;
pub use strategy_card::StrategyCard;
pub use strategy_details::StrategyDetails;
pub use strategy_list::StrategyList;
pub use strategy_modal::{ModalHit, StrategyModal};
pub use tab_bar::TabBar;
