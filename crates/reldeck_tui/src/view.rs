//! TUI view: header (fixed top), scrollable chat body, shortcut + input (fixed bottom).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    ChatsLayout, HEADER_STATUS_READY, HEADER_TITLE, INPUT_ICON, block_for_input_bordered,
    main_splits_with_padding, render_header, shortcut_inner_rect, shortcut_line, text_muted_style,
    text_style, vertical_split,
};
use crate::messages::{bot, error, user};
use crate::state::{ChatItem, ChatState, SUGGESTED_PROMPTS, Screen};

/// Landing view copy, shown when no messages have been exchanged yet.
const LANDING_BADGE: &str = "◆ reldeck";
const LANDING_GREETING: &str = "Hello there!";
const LANDING_TAGLINE: &str = "Ask about revenue, orders, and release performance.";

/// Draw the full TUI: main chat or debug traces depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    match state.screen {
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    use ratatui::widgets::{Block, Borders};

    let palette = &state.palette;
    let title = " Runtime logs (Ctrl+D to close) ";
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(crate::layouts::border_style(palette.border))
        .style(crate::layouts::background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.trace_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let offset = max_scroll.saturating_sub(state.trace_scroll);

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), text_muted_style(palette.text_muted))))
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Main chat view: header, scrollable chat body, shortcut + input fixed bottom.
fn draw_main(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    let splits = main_splits_with_padding(area);
    let palette = &state.palette;

    // ---- Header (fixed at top) ----
    let status = if state.is_loading {
        "Thinking…"
    } else if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let has_error = state.status.to_lowercase().contains("error")
        || state.status.to_lowercase().contains("failed");
    render_header(
        frame,
        splits.header,
        palette,
        HEADER_TITLE,
        status,
        state.is_loading,
        has_error,
    );

    // ---- Body: scrollable chat ----
    let chat = ChatsLayout::new(splits.body);
    let width = chat.inner.width as usize;
    let viewport_height = chat.inner.height as usize;

    let spacer = Line::from("");

    let mut all_lines: Vec<Line> = if state.cache_dirty {
        let mut lines = Vec::new();
        for item in &state.messages {
            if !lines.is_empty() {
                lines.push(spacer.clone());
            }
            match item {
                ChatItem::User(m) => {
                    lines.extend(user::user_message_lines(m, palette, width));
                }
                ChatItem::Bot(m) => {
                    lines.extend(bot::bot_message_lines(m, palette, width));
                }
                ChatItem::Error(m) => {
                    lines.extend(error::error_message_lines(m, palette, width));
                }
            }
        }
        state.cached_lines = lines.clone();
        state.cache_dirty = false;
        lines
    } else {
        state.cached_lines.clone()
    };

    // Thinking indicator while a query is in flight (600ms blink at 50ms tick)
    if state.is_loading {
        if !all_lines.is_empty() {
            all_lines.push(spacer.clone());
        }
        let dots = if (state.frame_count / 6) % 2 == 0 {
            "⋯ Thinking…"
        } else {
            "⋯ Thinking"
        };
        all_lines.push(Line::from(Span::styled(
            dots.to_string(),
            text_style(palette.accent),
        )));
    }

    let content_height = all_lines.len();

    // Scroll clamp: state.scroll is "lines scrolled UP from bottom" (0 = at bottom).
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.scroll = state.scroll.min(max_scroll);
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;

    // Convert to offset from top: scroll=0 → show last lines, scroll=max → show first lines.
    let offset_from_top = max_scroll.saturating_sub(state.scroll);
    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();

    // Landing view: badge, greeting, tagline, and numbered suggested prompts.
    if state.messages.is_empty() && !state.is_loading {
        frame.render_widget(
            Paragraph::new(landing_lines(palette)).alignment(ratatui::layout::Alignment::Center),
            chat.inner,
        );
    } else {
        let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, chat.inner);
    }

    // Scrollbar when content exceeds viewport
    if content_height > viewport_height && !state.messages.is_empty() {
        let track = palette.scrollbar_track_background;
        let thumb = palette.scrollbar_thumb_hover_background;
        let thumb_height = (((viewport_height as f64) * (viewport_height as f64)
            / (content_height as f64).max(1.0))
            .ceil() as u16)
            .max(1);
        // scroll=0 is bottom, scroll=max is top. Scrollbar thumb should be at
        // bottom when scroll=0, top when scroll=max. Use offset_from_top ratio.
        let scroll_ratio = if max_scroll == 0 {
            1.0
        } else {
            offset_from_top as f64 / max_scroll as f64
        };
        let thumb_y =
            (scroll_ratio * (viewport_height as f64 - thumb_height as f64)).round() as u16;
        let scrollbar_rect = Rect {
            x: chat.inner.x + chat.inner.width.saturating_sub(1),
            y: chat.inner.y,
            width: 1,
            height: chat.inner.height,
        };
        let track_style = ratatui::style::Style::default().bg(crate::layouts::rgb_to_color(track));
        frame.render_widget(
            ratatui::widgets::Block::default().style(track_style),
            scrollbar_rect,
        );
        let thumb_rect = Rect {
            x: scrollbar_rect.x,
            y: scrollbar_rect.y + thumb_y,
            width: 1,
            height: thumb_height,
        };
        let thumb_style = ratatui::style::Style::default().bg(crate::layouts::rgb_to_color(thumb));
        frame.render_widget(
            ratatui::widgets::Block::default().style(thumb_style),
            thumb_rect,
        );
    }

    // ---- Footer: input block + shortcut ----
    let (input_rect, shortcut_rect) = vertical_split(splits.footer, 3);

    let block = block_for_input_bordered(palette, true);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let placeholder = "Ask about your releases…";
    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (text_style(palette.accent), text_style(palette.text_placeholder))
    } else {
        (text_style(palette.success), text_style(palette.text))
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(
            if state.input_buffer.is_empty() {
                placeholder.to_string()
            } else {
                state.input_buffer.clone()
            },
            content_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    // Cursor: display width (unicode-width) for position
    let icon_width = INPUT_ICON.width();
    let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
    let cursor_col_offset = before_cursor.width();
    let cursor_col =
        (inner.x + icon_width as u16 + cursor_col_offset as u16).min(inner.x + inner.width);
    frame.set_cursor_position((cursor_col, inner.y));

    let shortcut_inner = shortcut_inner_rect(shortcut_rect);
    frame.render_widget(
        Paragraph::new(shortcut_line(
            palette,
            state.is_loading,
            !state.input_buffer.is_empty(),
        )),
        shortcut_inner,
    );
}

fn landing_lines(palette: &crate::theme::DeckPalette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            LANDING_BADGE.to_string(),
            text_style(palette.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            LANDING_GREETING.to_string(),
            text_style(palette.text).add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(Span::styled(
            LANDING_TAGLINE.to_string(),
            text_muted_style(palette.text_muted),
        )),
        Line::from(""),
    ];
    for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), text_style(palette.accent)),
            Span::styled((*prompt).to_string(), text_muted_style(palette.text_muted)),
        ]));
    }
    lines
}
