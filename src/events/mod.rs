//! Event handling for Stratdeck.
//!
//! Terminal input is translated into [`Action`](crate::state::Action)
//! values by a state-aware handler.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
