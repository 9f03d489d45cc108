//! Assistant reply rendering: indicator line, block stack, numbered follow-ups.

use ratatui::text::{Line, Span};

use reldeck_core::{ChatReply, ContentBlock};

use crate::blocks::{block_lines, follow_up_lines};
use crate::layouts::{text_muted_style, text_style};
use crate::theme::DeckPalette;
use crate::utils::LEFT_PADDING;

/// Indicator shown before an assistant reply (accent color).
pub const BOT_INDICATOR: &str = "▸";

/// One assistant reply: canonical blocks plus extracted follow-ups.
/// Plain-text replies become a single paragraph block.
#[derive(Debug, Clone)]
pub struct BotMessage {
    pub blocks: Vec<ContentBlock>,
    pub follow_ups: Vec<String>,
    /// Expansion state, one entry per thought block in order.
    pub expanded_thoughts: Vec<bool>,
    pub timestamp: Option<String>,
}

impl BotMessage {
    pub fn from_reply(reply: ChatReply, timestamp: Option<String>) -> Self {
        let (blocks, follow_ups) = match reply {
            ChatReply::Blocks { blocks, follow_ups } => (blocks, follow_ups),
            ChatReply::Text(text) => (vec![ContentBlock::paragraph(text)], Vec::new()),
        };
        let thought_count = blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::Thought { .. }))
            .count();
        Self {
            blocks,
            follow_ups,
            expanded_thoughts: vec![false; thought_count],
            timestamp,
        }
    }

    /// Toggle the last thought block's expansion. Returns false when the
    /// reply has no thought block.
    pub fn toggle_last_thought(&mut self) -> bool {
        match self.expanded_thoughts.last_mut() {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }
}

/// Build lines for an assistant reply: indicator + timestamp, then each block
/// indented, one spacer line between blocks, follow-ups last.
pub fn bot_message_lines(msg: &BotMessage, palette: &DeckPalette, width: usize) -> Vec<Line<'static>> {
    let inner_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let mut head = vec![
        Span::styled(BOT_INDICATOR.to_string(), text_style(palette.accent)),
        Span::raw(" "),
    ];
    if let Some(t) = &msg.timestamp {
        head.push(Span::styled(t.clone(), text_muted_style(palette.text_muted)));
    }
    let mut lines = vec![Line::from(head)];

    let mut thought_index = 0;
    for block in &msg.blocks {
        let expanded = match block {
            ContentBlock::Thought { .. } => {
                let flag = msg.expanded_thoughts.get(thought_index).copied().unwrap_or(false);
                thought_index += 1;
                flag
            }
            _ => false,
        };
        let block_out = block_lines(block, palette, inner_width, expanded);
        if block_out.is_empty() {
            continue;
        }
        if lines.len() > 1 {
            lines.push(Line::from(""));
        }
        for line in block_out {
            lines.push(indent(line));
        }
    }

    if !msg.follow_ups.is_empty() {
        lines.push(Line::from(""));
        for line in follow_up_lines(&msg.follow_ups, palette) {
            lines.push(indent(line));
        }
    }
    lines
}

fn indent(line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(LEFT_PADDING)];
    spans.extend(line.spans);
    Line::from(spans)
}
