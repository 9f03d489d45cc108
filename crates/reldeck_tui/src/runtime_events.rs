//! Maps [ChatEvent]s from the background query task onto [ChatState].

use chrono::Local;
use reldeck_core::ChatEvent;
use reldeck_core::reply::parse_reply;

use crate::state::ChatState;

fn now_timestamp() -> Option<String> {
    Some(Local::now().format("%H:%M").to_string())
}

/// Apply one event from the query task to the TUI state.
pub fn apply_chat_event(state: &mut ChatState, event: ChatEvent) {
    match event {
        ChatEvent::Reply { result } => {
            state.finish_loading();
            state.push_reply(parse_reply(&result), now_timestamp());
        }
        ChatEvent::Status { message } => {
            state.status = message;
            state.status_set_at = Some(std::time::Instant::now());
            state.status_permanent = false;
        }
        ChatEvent::Error { message } => {
            state.finish_loading();
            state.status = "Query failed".to_string();
            state.status_set_at = Some(std::time::Instant::now());
            state.status_permanent = false;
            state.push_error(message, now_timestamp());
        }
    }
    state.needs_redraw = true;
}
