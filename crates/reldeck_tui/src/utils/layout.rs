//! Rect padding helpers for layout code.

use ratatui::layout::Rect;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_padding_shrinks_width() {
        let area = Rect::new(0, 0, 80, 20);
        let inner = horizontal_padding(area);
        assert_eq!(inner.x, HORIZONTAL_PADDING);
        assert_eq!(inner.width, 80 - HORIZONTAL_PADDING * 2);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn horizontal_padding_zero_width() {
        let area = Rect::new(0, 0, 1, 5);
        let inner = horizontal_padding_with(area, 2);
        assert_eq!(inner.width, 0);
    }
}
