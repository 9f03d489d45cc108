//! Header strip layout: top bar with title and right-aligned status (with colored dot).

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;

use super::style::{background_style, border_style, danger_style, success_style, text_muted_style, text_style, warning_style};
use crate::theme::DeckPalette;
use crate::utils::horizontal_padding;

/// Layout for the main app header: outer area and padded inner rect for content.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    /// Full header strip (e.g. from [super::split::MainSplits::header]).
    pub area: Rect,
    /// Inner rect with horizontal padding for title and right text.
    pub inner: Rect,
}

impl HeadLayout {
    /// Build from the header [Rect].
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Build the first header line: title (bold) left, then right-aligned status with colored dot.
/// is_loading: yellow dot; has_error: red dot; else green dot.
pub fn header_line(
    title: &str,
    right: &str,
    is_loading: bool,
    has_error: bool,
    palette: &DeckPalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if has_error {
        danger_style(palette.danger)
    } else if is_loading {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    };
    let right_style = text_muted_style(palette.text_muted);
    let left_len = title.len() + 1;
    let right_len = 2 + right.len(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right.to_string(), right_style),
    ])
}

/// Block for the header bar: full-width background, bottom border on second line.
pub fn block_for_head(_layout: &HeadLayout, palette: &DeckPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background))
}

/// Default title shown in the header.
pub const HEADER_TITLE: &str = "reldeck";

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

/// Draw the header: two-line block (title line, then border), status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &DeckPalette,
    title: &str,
    status: &str,
    is_loading: bool,
    has_error: bool,
) {
    let layout = HeadLayout::new(area);
    let block = block_for_head(&layout, palette);
    let line = header_line(title, status, is_loading, has_error, palette, layout.inner.width);
    let bg = background_style(palette.status_bar_background);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), layout.inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_contains_title_and_status() {
        let palette = DeckPalette::deck_dark();
        let line = header_line(HEADER_TITLE, "Ready", false, false, &palette, 60);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("reldeck"));
        assert!(text.ends_with("● Ready"));
    }

    #[test]
    fn header_line_narrow_width_no_panic() {
        let palette = DeckPalette::deck_dark();
        let line = header_line("reldeck", "a very long status string", false, false, &palette, 4);
        assert!(!line.spans.is_empty());
    }
}
