//! Terminal UI for reldeck: chat view over release analytics.
//!
//! The entry point is [run_tui], which takes ownership of the terminal and
//! renders [ChatEvent](reldeck_core::ChatEvent)s arriving from a background
//! query task.

pub mod blocks;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod runtime_events;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::run_tui;
pub use runtime_events::apply_chat_event;
pub use state::{ChatItem, ChatState, SUGGESTED_PROMPTS, Screen};
pub use view::draw;
