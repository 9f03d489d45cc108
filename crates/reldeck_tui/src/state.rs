//! TUI state: chat items, input buffer, scroll, loading flag, theme.
//!
//! [ChatState] holds everything the view needs to render. [ChatItem] wraps
//! message types from [crate::messages] so we can store a single list.

use reldeck_core::ChatReply;

use crate::messages::{
    bot::BotMessage,
    error::ErrorMessage,
    user::UserMessage,
};
use crate::theme::{Appearance, DeckPalette};
use crate::utils::format_duration;

/// Which screen is currently shown (main chat vs debug traces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    DebugTraces,
}

/// Max trace lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// Suggested prompts shown on the landing view, selectable with 1-4.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Compare revenue trends across all quarters",
    "Show me my top restaurant by revenue this month",
    "What numbers have seen bizarre fall as compared to same time last year?",
    "Predict revenue for the next 3 months",
];

/// One item in the chat: user query, assistant reply, or error.
#[derive(Debug, Clone)]
pub enum ChatItem {
    User(UserMessage),
    Bot(BotMessage),
    Error(ErrorMessage),
}

/// TUI application state.
#[derive(Debug)]
pub struct ChatState {
    /// Ordered list of chat items to display.
    pub messages: Vec<ChatItem>,
    /// Current input line (footer).
    pub input_buffer: String,
    /// Cursor position within input_buffer (0..=len).
    pub input_cursor: usize,
    /// Vertical scroll offset (number of lines scrolled up from the bottom).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content; when false, user scrolled up.
    pub auto_scroll: bool,
    /// Theme palette (dark/light).
    pub palette: DeckPalette,
    /// Optional status text for header right side.
    pub status: String,
    /// True while a query is in flight (shows the thinking indicator).
    pub is_loading: bool,
    /// When the in-flight query started, for the answered-in status.
    pub loading_since: Option<std::time::Instant>,
    /// Incremented each run_loop iteration for the thinking-dots animation.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Cached line list; invalidated by push_* / toggle / resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// True when cached_lines is stale.
    pub cache_dirty: bool,
    /// Last content height from previous draw (for scroll clamp).
    pub last_content_height: usize,
    /// Last viewport height from previous draw (for scroll clamp).
    pub last_viewport_height: usize,
    /// When set, status is transient and should auto-clear after a timeout.
    pub status_set_at: Option<std::time::Instant>,
    /// When true, status stays until replaced (no timeout clear).
    pub status_permanent: bool,
    /// Current screen (main chat or debug traces).
    pub screen: Screen,
    /// Debug trace lines (tracing output). Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for the debug trace view (lines scrolled up).
    pub trace_scroll: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: DeckPalette::deck_dark(),
            status: String::new(),
            is_loading: false,
            loading_since: None,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            last_content_height: 0,
            last_viewport_height: 0,
            status_set_at: None,
            status_permanent: false,
            screen: Screen::Main,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: DeckPalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    fn touch(&mut self) {
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// Push a user query.
    pub fn push_user(&mut self, text: String, timestamp: Option<String>) {
        self.messages.push(ChatItem::User(UserMessage { text, timestamp }));
        self.touch();
    }

    /// Push an assistant reply (parsed upstream).
    pub fn push_reply(&mut self, reply: ChatReply, timestamp: Option<String>) {
        self.messages.push(ChatItem::Bot(BotMessage::from_reply(reply, timestamp)));
        self.touch();
    }

    /// Push an inline error message.
    pub fn push_error(&mut self, text: String, timestamp: Option<String>) {
        self.messages.push(ChatItem::Error(ErrorMessage { text, timestamp }));
        self.touch();
    }

    /// Mark a query as in flight.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.loading_since = Some(std::time::Instant::now());
        self.needs_redraw = true;
    }

    /// Clear the loading flag and set a transient answered-in status.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
        if let Some(since) = self.loading_since.take() {
            self.status = format!("Answered in {}", format_duration(since.elapsed()));
            self.status_set_at = Some(std::time::Instant::now());
        }
        self.needs_redraw = true;
    }

    /// Follow-ups of the most recent assistant reply, if it carries any.
    /// An older reply's follow-ups never resurface past a newer reply.
    pub fn latest_follow_ups(&self) -> Option<&[String]> {
        self.messages
            .iter()
            .rev()
            .find_map(|item| match item {
                ChatItem::Bot(b) => Some(b.follow_ups.as_slice()),
                _ => None,
            })
            .filter(|follow_ups| !follow_ups.is_empty())
    }

    /// Query submitted when digit `n` (1-9) is pressed with an empty input:
    /// a follow-up of the latest reply, or a suggested prompt on the landing
    /// view.
    pub fn prompt_for_digit(&self, n: usize) -> Option<String> {
        if n == 0 {
            return None;
        }
        if let Some(follow_ups) = self.latest_follow_ups() {
            return follow_ups.get(n - 1).cloned();
        }
        if self.messages.is_empty() {
            return SUGGESTED_PROMPTS.get(n - 1).map(|s| s.to_string());
        }
        None
    }

    /// Toggle the latest thought block of the latest assistant reply
    /// (key `t` when input empty).
    pub fn toggle_latest_thought(&mut self) {
        for item in self.messages.iter_mut().rev() {
            if let ChatItem::Bot(b) = item {
                if b.toggle_last_thought() {
                    self.cache_dirty = true;
                    self.needs_redraw = true;
                }
                return;
            }
        }
    }

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Input buffer: delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Input buffer: delete character at cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    /// Move cursor left one character (UTF-8 safe).
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Move cursor right one character (UTF-8 safe).
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_cursor = end;
        self.needs_redraw = true;
    }

    /// Cursor to start of input.
    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input; if empty, enable auto_scroll and scroll to bottom.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        if self.input_buffer.is_empty() {
            self.auto_scroll = true;
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Input buffer: clear and return current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll when at bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Append a line to the debug trace buffer (Ctrl+D screen). Drops oldest
    /// lines over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        self.needs_redraw = true;
    }

    /// Scroll the trace view up.
    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll the trace view down.
    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reldeck_core::reply::parse_reply;

    #[test]
    fn input_insert_ascii() {
        let mut s = ChatState::new();
        s.input_insert('a');
        s.input_insert('b');
        assert_eq!(s.input_buffer, "ab");
        assert_eq!(s.input_cursor, 2);
    }

    #[test]
    fn input_insert_utf8_emoji() {
        let mut s = ChatState::new();
        s.input_insert('é');
        s.input_insert('🎉');
        assert_eq!(s.input_buffer, "é🎉");
        assert_eq!(s.input_cursor, "é🎉".len());
    }

    #[test]
    fn input_backspace_at_end() {
        let mut s = ChatState::new();
        s.input_buffer = "hi".to_string();
        s.input_cursor = 2;
        s.input_backspace();
        assert_eq!(s.input_buffer, "h");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_backspace_at_zero_no_op() {
        let mut s = ChatState::new();
        s.input_buffer = "x".to_string();
        s.input_cursor = 0;
        s.input_backspace();
        assert_eq!(s.input_buffer, "x");
    }

    #[test]
    fn input_take_returns_and_resets() {
        let mut s = ChatState::new();
        s.input_buffer = "hello".to_string();
        s.input_cursor = 5;
        let line = s.input_take();
        assert_eq!(line, "hello");
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn input_cursor_multibyte() {
        let mut s = ChatState::new();
        s.input_insert('你');
        s.input_insert('好');
        s.input_cursor_left();
        assert_eq!(s.input_cursor, "你".len());
        s.input_cursor_left();
        assert_eq!(s.input_cursor, 0);
        s.input_cursor_right();
        assert_eq!(s.input_cursor, "你".len());
    }

    #[test]
    fn input_delete_multibyte() {
        let mut s = ChatState::new();
        s.input_buffer = "你好".to_string();
        s.input_cursor = 0;
        s.input_delete();
        assert_eq!(s.input_buffer, "好");
    }

    #[test]
    fn input_clear_and_kill() {
        let mut s = ChatState::new();
        s.input_buffer = "hello world".to_string();
        s.input_cursor = 5;
        s.input_kill_to_end();
        assert_eq!(s.input_buffer, "hello");
        s.input_clear_line();
        assert!(s.input_buffer.is_empty());
    }

    #[test]
    fn scroll_up_disables_auto_scroll() {
        let mut s = ChatState::new();
        s.auto_scroll = true;
        s.scroll_up(3);
        assert!(!s.auto_scroll);
        assert_eq!(s.scroll, 3);
    }

    #[test]
    fn scroll_down_to_zero_enables_auto_scroll() {
        let mut s = ChatState::new();
        s.auto_scroll = false;
        s.scroll = 1;
        s.scroll_down(1);
        assert_eq!(s.scroll, 0);
        assert!(s.auto_scroll);
    }

    #[test]
    fn auto_scroll_off_preserves_scroll() {
        let mut s = ChatState::new();
        s.auto_scroll = false;
        s.scroll = 10;
        s.push_user("hi".to_string(), None);
        assert_eq!(s.scroll, 10);
    }

    #[test]
    fn push_reply_adds_bot_item() {
        let mut s = ChatState::new();
        s.push_reply(parse_reply("plain text"), None);
        assert_eq!(s.messages.len(), 1);
        assert!(matches!(&s.messages[0], ChatItem::Bot(_)));
        assert!(s.cache_dirty);
    }

    #[test]
    fn loading_roundtrip_sets_status() {
        let mut s = ChatState::new();
        s.begin_loading();
        assert!(s.is_loading);
        s.finish_loading();
        assert!(!s.is_loading);
        assert!(s.status.starts_with("Answered in "));
        assert!(s.status_set_at.is_some());
    }

    #[test]
    fn prompt_for_digit_uses_suggested_when_empty() {
        let s = ChatState::new();
        assert_eq!(s.prompt_for_digit(1).as_deref(), Some(SUGGESTED_PROMPTS[0]));
        assert_eq!(s.prompt_for_digit(4).as_deref(), Some(SUGGESTED_PROMPTS[3]));
        assert!(s.prompt_for_digit(5).is_none());
        assert!(s.prompt_for_digit(0).is_none());
    }

    #[test]
    fn prompt_for_digit_prefers_follow_ups() {
        let mut s = ChatState::new();
        let raw = r#"[
            {"type":"paragraph","text":"Answer."},
            {"type":"follow_up_queries","queries":["Show top stores"]}
        ]"#;
        s.push_reply(parse_reply(raw), None);
        assert_eq!(s.prompt_for_digit(1).as_deref(), Some("Show top stores"));
        assert!(s.prompt_for_digit(2).is_none());
    }

    #[test]
    fn prompt_for_digit_none_mid_conversation_without_follow_ups() {
        let mut s = ChatState::new();
        s.push_user("hi".to_string(), None);
        s.push_reply(parse_reply("plain"), None);
        assert!(s.prompt_for_digit(1).is_none());
    }

    #[test]
    fn follow_ups_scoped_to_most_recent_reply() {
        let mut s = ChatState::new();
        let raw = r#"[
            {"type":"paragraph","text":"Older."},
            {"type":"follow_up_queries","queries":["Stale query"]}
        ]"#;
        s.push_reply(parse_reply(raw), None);
        s.push_reply(parse_reply("newer plain reply"), None);
        assert!(s.latest_follow_ups().is_none());
        assert!(s.prompt_for_digit(1).is_none());
    }

    #[test]
    fn toggle_latest_thought_marks_cache_dirty() {
        let mut s = ChatState::new();
        s.push_reply(parse_reply(r#"[{"type":"thought","text":"why"}]"#), None);
        s.cache_dirty = false;
        s.toggle_latest_thought();
        assert!(s.cache_dirty);
        if let ChatItem::Bot(b) = &s.messages[0] {
            assert_eq!(b.expanded_thoughts, vec![true]);
        } else {
            panic!("expected bot item");
        }
    }

    #[test]
    fn trace_lines_capped() {
        let mut s = ChatState::new();
        for i in 0..2500 {
            s.push_trace_line(format!("line {}", i));
        }
        assert!(s.trace_lines.len() <= 2000);
    }
}
