//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]** — Header strip layout and styled header line.
//! - **[chats]** — Chat area layout.
//! - **[input]** — Input bar block.
//! - **[shortcut]** — Shortcut hint line (below input).

mod chats;
mod head;
mod input;
mod shortcut;
mod split;
mod style;

pub use chats::ChatsLayout;
pub use head::{block_for_head, header_line, render_header, HeadLayout, HEADER_STATUS_READY, HEADER_TITLE};
pub use input::{block_for_input_bordered, InputLayout, INPUT_ICON, INPUT_PADDING_H};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{main_splits, main_splits_with_padding, vertical_split, MainSplits, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, info_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
