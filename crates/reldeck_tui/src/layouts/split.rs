//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (top, two lines: title + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: input block (3 lines: border + content + border) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Regions for the main app layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    /// Top strip (title + status).
    pub header: Rect,
    /// Middle area (chat). May have zero height if area too small.
    pub body: Rect,
    /// Bottom strip (input + shortcut hints).
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (scrollable middle), footer (fixed bottom).
/// Uses [HEADER_HEIGHT] and [FOOTER_HEIGHT]. Body height = area.height - header - footer.
pub fn main_splits(area: Rect) -> MainSplits {
    let height = area.height;
    let (header_h, footer_h) = (HEADER_HEIGHT, FOOTER_HEIGHT);
    let body_h = height.saturating_sub(header_h + footer_h);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_h,
    };
    let body = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h),
        width: area.width,
        height: body_h,
    };
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(header_h + body_h),
        width: area.width,
        height: footer_h,
    };

    MainSplits {
        header,
        body,
        footer,
    }
}

/// Same as [main_splits] but body is the padded inner area (horizontal padding only).
pub fn main_splits_with_padding(area: Rect) -> MainSplits {
    let raw = main_splits(area);
    MainSplits {
        header: raw.header,
        body: horizontal_padding(raw.body),
        footer: raw.footer,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let bottom_h = area.height.saturating_sub(top_h);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: bottom_h,
    };
    (top, bottom)
}
