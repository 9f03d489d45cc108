//! Shortcut hint layout: fixed line below input (muted style), context-aware hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::DeckPalette;

/// Horizontal inset so the shortcut aligns with input content (input border + input padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line with horizontal padding so it aligns with the input content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    let w = area.width.saturating_sub(inset.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Build the shortcut line for the footer. Dynamic based on state:
/// - While a query is in flight: "Thinking…  Ctrl+C: quit"
/// - When input has text: "Enter: send  Ctrl+U: clear  Ctrl+C: quit"
/// - When input empty: scroll/follow-up/thought hints
pub fn shortcut_line(palette: &DeckPalette, is_loading: bool, input_has_text: bool) -> Line<'static> {
    let hint = if is_loading {
        "Thinking…  ·  Ctrl+C: quit"
    } else if input_has_text {
        "Enter: send  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
    } else {
        "↑↓: scroll  ·  1-9: follow-up  ·  t: thought  ·  Ctrl+D: logs  ·  q: quit"
    };
    Line::from(vec![Span::styled(
        hint.to_string(),
        text_muted_style(palette.text_muted),
    )])
}
