//! Inline error message rendering (✗ icon, danger style).

use ratatui::text::{Line, Span};

use crate::layouts::danger_style;
use crate::theme::DeckPalette;
use crate::utils::{wrap_lines, LEFT_PADDING};

/// Inline error shown in chat when a query fails.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

/// Chat error text for a failed backend query. The real cause goes to the
/// log sink; the chat shows this fixed line.
pub const QUERY_FAILED_TEXT: &str = "Error while getting response. Try again.";

/// Build lines for an error message: ✗ icon, text wrapped with 2-space indent.
pub fn error_message_lines(msg: &ErrorMessage, palette: &DeckPalette, width: usize) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);
    let style = danger_style(palette.danger);

    let mut first_line = vec![Span::styled("✗ ", style)];
    if let Some(t) = &msg.timestamp {
        first_line.push(Span::styled(format!("{} ", t), style));
    }
    if wrapped.is_empty() {
        return vec![Line::from(first_line)];
    }

    first_line.push(Span::styled(wrapped[0].clone(), style));
    let mut lines = Vec::with_capacity(wrapped.len());
    lines.push(Line::from(first_line));
    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), style),
        ]));
    }
    lines
}
