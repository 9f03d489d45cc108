//! Input bar layout: bottom strip for the query line.

use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders, Padding},
};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::DeckPalette;
use crate::utils::horizontal_padding;

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Icon shown at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// Layout for the input bar: outer area and inner rect for cursor/content.
#[derive(Debug, Clone)]
pub struct InputLayout {
    /// Full footer strip (e.g. from [super::split::MainSplits::footer]).
    pub area: Rect,
    /// Inner rect with horizontal padding for the input line.
    pub inner: Rect,
}

impl InputLayout {
    /// Build from the footer [Rect].
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Block for the input area with full rounded border and horizontal padding.
/// When focused, uses the focused border color. Focused is typically always true when input is active.
pub fn block_for_input_bordered(palette: &DeckPalette, focused: bool) -> Block<'static> {
    let border_style = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(background_style(palette.status_bar_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}
