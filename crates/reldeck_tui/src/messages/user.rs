//! User query rendering.
//!
//! First line: left border + indicator + optional timestamp + text start;
//! continuation lines keep the border with a 2-space indent.

use ratatui::text::{Line, Span};

use crate::layouts::{text_muted_style, text_style};
use crate::theme::DeckPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// User query for display.
#[derive(Debug, Clone)]
pub struct UserMessage {
    pub text: String,
    /// Optional short timestamp (e.g. "10:32"). Shown in muted style.
    pub timestamp: Option<String>,
}

/// Indicator shown before the user query (accent color).
pub const USER_INDICATOR: &str = "»";

/// Left border (2-char) for user queries.
const USER_LEFT_BORDER: &str = "│ ";

/// Build lines for a user query.
pub fn user_message_lines(msg: &UserMessage, palette: &DeckPalette, width: usize) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.len() + USER_LEFT_BORDER.len();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);
    let border_span = Span::styled(USER_LEFT_BORDER.to_string(), text_style(palette.accent));

    let mut first_line = vec![
        border_span.clone(),
        Span::styled(USER_INDICATOR.to_string(), text_style(palette.accent)),
        Span::raw(" "),
    ];
    if let Some(t) = &msg.timestamp {
        first_line.push(Span::styled(format!("{} ", t), text_muted_style(palette.text_muted)));
    }
    if wrapped.is_empty() {
        return vec![Line::from(first_line)];
    }

    first_line.push(Span::styled(wrapped[0].clone(), text_style(palette.text)));
    let mut lines = Vec::with_capacity(wrapped.len());
    lines.push(Line::from(first_line));
    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_has_indicator_and_border() {
        let msg = UserMessage {
            text: "Compare revenue trends".into(),
            timestamp: None,
        };
        let palette = DeckPalette::deck_dark();
        let lines = user_message_lines(&msg, &palette, 40);
        assert!(lines[0].spans.iter().any(|s| s.content.as_ref() == USER_INDICATOR));
        assert!(lines[0].spans.iter().any(|s| s.content.contains("│")));
    }

    #[test]
    fn wraps_long_text_with_border() {
        let msg = UserMessage {
            text: "one two three four five six seven".into(),
            timestamp: None,
        };
        let palette = DeckPalette::deck_dark();
        let lines = user_message_lines(&msg, &palette, 12);
        assert!(lines.len() > 1);
        assert!(lines[1].spans.iter().any(|s| s.content.contains("│")));
    }

    #[test]
    fn empty_text_still_renders_prefix() {
        let msg = UserMessage { text: "".into(), timestamp: None };
        let palette = DeckPalette::deck_dark();
        let lines = user_message_lines(&msg, &palette, 40);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn timestamp_shown_when_present() {
        let msg = UserMessage { text: "hi".into(), timestamp: Some("09:15".into()) };
        let palette = DeckPalette::deck_dark();
        let lines = user_message_lines(&msg, &palette, 40);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("09:15")));
    }
}
