//! Chat area layout: scrollable body region for the message list.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Layout for the chat/messages body: outer area and padded inner rect.
#[derive(Debug, Clone)]
pub struct ChatsLayout {
    /// Full body area (e.g. from [super::split::MainSplits::body]).
    pub area: Rect,
    /// Inner rect with horizontal padding for message content.
    pub inner: Rect,
}

impl ChatsLayout {
    /// Build from the body [Rect].
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}
