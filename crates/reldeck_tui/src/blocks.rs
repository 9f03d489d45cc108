//! Content block rendering: one line builder per [ContentBlock] variant.
//!
//! Blocks arrive already normalized; this module only decides glyphs, colors,
//! and wrapping. Fallback variants render as visible cards so a bad block
//! never takes down the rest of the reply.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use reldeck_core::format::{self, CellPolicy, Segment};
use reldeck_core::table::column_budget;
use reldeck_core::{CellDisplay, ColumnAlign, ContentBlock, Metric, MetricKind, TableBlock, Trend, TrendDirection};

use crate::layouts::{danger_style, info_style, success_style, text_muted_style, text_style, warning_style};
use crate::theme::DeckPalette;
use crate::utils::{truncate_ellipsis, wrap_lines};

/// Placeholder shown for missing table cells.
pub const CELL_PLACEHOLDER: &str = "-";

/// Collapsed/expanded glyphs for thought blocks.
pub const THOUGHT_COLLAPSED: &str = "▸";
pub const THOUGHT_EXPANDED: &str = "▾";

/// Label on thought blocks (collapsed and expanded).
pub const THOUGHT_LABEL: &str = "Thought for sometime";

/// Build display lines for one block. `thought_expanded` only affects
/// [ContentBlock::Thought]; everything else ignores it.
pub fn block_lines(
    block: &ContentBlock,
    palette: &DeckPalette,
    width: usize,
    thought_expanded: bool,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    match block {
        ContentBlock::Thought { text } => thought_lines(text, palette, width, thought_expanded),
        ContentBlock::Heading { text } => {
            let bold = text_style(palette.text).add_modifier(Modifier::BOLD);
            wrap_formatted(text, width, bold, bold)
        }
        ContentBlock::Paragraph { text } => {
            let plain = text_style(palette.text);
            let bold = text_style(palette.text).add_modifier(Modifier::BOLD);
            wrap_formatted(text, width, plain, bold)
        }
        ContentBlock::Summary { items } => {
            let mut lines = vec![Line::from(Span::styled(
                "◈ Summary",
                text_style(palette.text).add_modifier(Modifier::BOLD),
            ))];
            lines.extend(bullet_lines(items, palette, width));
            lines
        }
        ContentBlock::List { title, items } => {
            let mut lines = Vec::new();
            if let Some(t) = title {
                lines.push(Line::from(Span::styled(
                    t.clone(),
                    text_style(palette.text).add_modifier(Modifier::BOLD),
                )));
            }
            lines.extend(bullet_lines(items, palette, width));
            lines
        }
        ContentBlock::Table(table) => table_lines(table, palette, width),
        ContentBlock::SingleValue {
            title,
            value,
            unit,
            description,
        } => single_value_lines(title.as_deref(), value.as_deref(), unit.as_deref(), description.as_deref(), palette, width),
        ContentBlock::MultiMetricDashboard {
            title,
            description,
            metrics,
        } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                text_style(palette.text).add_modifier(Modifier::BOLD),
            ))];
            for seg in wrap_lines(description, width) {
                lines.push(Line::from(Span::styled(seg, text_muted_style(palette.text_muted))));
            }
            for metric in metrics {
                lines.push(metric_line(metric, palette));
            }
            lines
        }
        ContentBlock::SingleKeyMetric {
            title,
            description,
            metric,
        } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                text_style(palette.text).add_modifier(Modifier::BOLD),
            ))];
            lines.push(metric_line(metric, palette));
            for seg in wrap_lines(description, width) {
                lines.push(Line::from(Span::styled(seg, text_muted_style(palette.text_muted))));
            }
            lines
        }
        ContentBlock::FollowUpQueries { queries } => follow_up_lines(queries, palette),
        ContentBlock::Invalid { .. } => fallback_card(block, danger_style(palette.danger)),
        ContentBlock::Unknown { .. } | ContentBlock::Unsupported { .. } => {
            fallback_card(block, warning_style(palette.warning))
        }
    }
}

/// Numbered follow-up lines ("[1] … ↗"), used below bot messages and when a
/// follow_up_queries block survives into a render path.
pub fn follow_up_lines(queries: &[String], palette: &DeckPalette) -> Vec<Line<'static>> {
    let accent = text_style(palette.accent);
    let muted = text_muted_style(palette.text_muted);
    queries
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, q)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), accent),
                Span::styled(q.clone(), muted),
                Span::styled(" ↗", accent),
            ])
        })
        .collect()
}

fn fallback_card(block: &ContentBlock, style: Style) -> Vec<Line<'static>> {
    let text = block.fallback_text().unwrap_or_default();
    vec![Line::from(vec![
        Span::styled("✗ ", style),
        Span::styled(text, style),
    ])]
}

fn thought_lines(
    text: &str,
    palette: &DeckPalette,
    width: usize,
    expanded: bool,
) -> Vec<Line<'static>> {
    let glyph = if expanded { THOUGHT_EXPANDED } else { THOUGHT_COLLAPSED };
    let mut lines = vec![Line::from(vec![
        Span::styled(glyph.to_string(), info_style(palette.info)),
        Span::raw(" "),
        Span::styled(THOUGHT_LABEL.to_string(), text_muted_style(palette.text_muted)),
    ])];
    if expanded {
        for seg in wrap_lines(text, width.saturating_sub(2).max(1)) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(seg, text_muted_style(palette.text_muted)),
            ]));
        }
    }
    lines
}

fn bullet_lines(items: &[String], palette: &DeckPalette, width: usize) -> Vec<Line<'static>> {
    let plain = text_style(palette.text);
    let bold = text_style(palette.text).add_modifier(Modifier::BOLD);
    let muted = text_muted_style(palette.text_muted);
    let mut lines = Vec::new();
    for item in items {
        let wrapped = wrap_formatted(item, width.saturating_sub(2).max(1), plain, bold);
        for (i, line) in wrapped.into_iter().enumerate() {
            let prefix = if i == 0 { "• " } else { "  " };
            let mut spans = vec![Span::styled(prefix.to_string(), muted)];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn single_value_lines(
    title: Option<&str>,
    value: Option<&str>,
    unit: Option<&str>,
    description: Option<&str>,
    palette: &DeckPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(t) = title {
        lines.push(Line::from(Span::styled(
            t.to_string(),
            text_muted_style(palette.text_muted),
        )));
    }
    match value {
        Some(v) => {
            // Verbatim value: symbol substitution and bold segmentation only,
            // no K/M/B abbreviation (that belongs to currency cells and
            // amount metrics).
            let text: String = format::parse_formatted_text(&format::format_currency(v))
                .iter()
                .map(Segment::content)
                .collect();
            let mut spans = vec![Span::styled(
                text,
                text_style(palette.text).add_modifier(Modifier::BOLD),
            )];
            if let Some(u) = unit {
                spans.push(Span::styled(format!(" {u}"), text_muted_style(palette.text_muted)));
            }
            lines.push(Line::from(spans));
        }
        None => lines.push(Line::from(Span::styled(
            "No data available".to_string(),
            text_muted_style(palette.text_muted),
        ))),
    }
    if let Some(d) = description {
        for seg in wrap_lines(d, width) {
            lines.push(Line::from(Span::styled(seg, text_muted_style(palette.text_muted))));
        }
    }
    lines
}

/// One metric card on a single line: optional `$` icon, formatted value,
/// name, and a colored trend arrow when both trend fields are present.
fn metric_line(metric: &Metric, palette: &DeckPalette) -> Line<'static> {
    let mut spans = Vec::new();
    if metric.icon.as_deref() == Some("dollar") {
        spans.push(Span::styled("$ ".to_string(), text_style(palette.accent)));
    }
    let value = match metric.kind {
        MetricKind::Amount => format::format_short_currency(&metric.value),
        MetricKind::Percent => format::format_percent(&metric.value),
    };
    spans.push(Span::styled(
        value,
        text_style(palette.text).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", metric.name),
        text_muted_style(palette.text_muted),
    ));
    if let (Some(trend), Some(direction)) = (&metric.trend, metric.trend_direction) {
        let (arrow, style) = match direction {
            TrendDirection::Up => ("↗", success_style(palette.success)),
            TrendDirection::Down => ("↘", danger_style(palette.danger)),
        };
        spans.push(Span::styled(format!("  {arrow} {trend}"), style));
    }
    Line::from(spans)
}

// --- Table sub-renderer ---

fn table_lines(table: &TableBlock, palette: &DeckPalette, width: usize) -> Vec<Line<'static>> {
    let columns = table.columns();
    if columns.is_empty() {
        return Vec::new();
    }
    let policy = CellPolicy::default();
    let budget = column_budget(columns.len()) as usize;

    // Measure: header width vs widest cell, clamped to the per-column budget.
    let mut widths: Vec<usize> = columns.iter().map(|c| c.title.chars().count()).collect();
    let mut drawn_rows: Vec<Vec<(Vec<Span<'static>>, usize)>> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut drawn = Vec::with_capacity(columns.len());
        for (ci, col) in columns.iter().enumerate() {
            let cell = cell_spans(&table.display_cell(row, col.index, policy), palette);
            widths[ci] = widths[ci].max(cell.1);
            drawn.push(cell);
        }
        drawn_rows.push(drawn);
    }
    for w in &mut widths {
        *w = (*w).min(budget).max(1);
    }

    let mut lines = Vec::new();
    if let Some(title) = &table.title {
        lines.push(Line::from(Span::styled(
            title.clone(),
            text_style(palette.text).add_modifier(Modifier::BOLD),
        )));
    }

    let header_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let mut header_spans = Vec::new();
    for (ci, col) in columns.iter().enumerate() {
        if ci > 0 {
            header_spans.push(Span::raw("  "));
        }
        let text = truncate_ellipsis(&col.title, widths[ci]);
        header_spans.push(Span::styled(aligned(&text, widths[ci], col.align), header_style));
    }
    lines.push(Line::from(header_spans));

    let total: usize = widths.iter().sum::<usize>() + 2 * (columns.len() - 1);
    lines.push(Line::from(Span::styled(
        "─".repeat(total.min(width)),
        text_muted_style(palette.text_muted),
    )));

    for drawn in drawn_rows {
        let mut spans = Vec::new();
        for (ci, (cell_spans, cell_width)) in drawn.into_iter().enumerate() {
            if ci > 0 {
                spans.push(Span::raw("  "));
            }
            let w = widths[ci];
            if cell_width > w {
                // Over budget: flatten and truncate, styling is lost.
                let flat: String = cell_spans.iter().map(|s| s.content.as_ref()).collect();
                spans.push(Span::styled(
                    truncate_ellipsis(&flat, w),
                    text_style(palette.text),
                ));
            } else {
                let pad = " ".repeat(w - cell_width);
                match columns[ci].align {
                    ColumnAlign::Right => {
                        spans.push(Span::raw(pad));
                        spans.extend(cell_spans);
                    }
                    ColumnAlign::Left => {
                        spans.extend(cell_spans);
                        spans.push(Span::raw(pad));
                    }
                }
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Spans and display width for one classified cell.
fn cell_spans(display: &CellDisplay, palette: &DeckPalette) -> (Vec<Span<'static>>, usize) {
    match display {
        CellDisplay::Placeholder => (
            vec![Span::styled(
                CELL_PLACEHOLDER.to_string(),
                text_muted_style(palette.text_muted),
            )],
            CELL_PLACEHOLDER.chars().count(),
        ),
        CellDisplay::Currency(text) => (
            vec![Span::styled(text.clone(), text_style(palette.text))],
            text.chars().count(),
        ),
        CellDisplay::Percent { text, trend } => {
            let (glyph, style) = match trend {
                Trend::Up => ("▲", success_style(palette.success)),
                Trend::Down => ("▼", danger_style(palette.danger)),
                Trend::Flat => ("–", text_muted_style(palette.text_muted)),
            };
            (
                vec![
                    Span::styled(format!("{glyph} "), style),
                    Span::styled(text.clone(), text_style(palette.text)),
                ],
                2 + text.chars().count(),
            )
        }
        CellDisplay::Formatted(segments) => {
            let mut spans = Vec::with_capacity(segments.len());
            let mut width = 0;
            for segment in segments {
                let (content, style) = match segment {
                    Segment::Text(s) => (s.clone(), text_style(palette.text)),
                    Segment::Bold(s) => {
                        (s.clone(), text_style(palette.text).add_modifier(Modifier::BOLD))
                    }
                };
                width += content.chars().count();
                spans.push(Span::styled(content, style));
            }
            (spans, width)
        }
    }
}

fn aligned(text: &str, width: usize, align: ColumnAlign) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = " ".repeat(width - len);
    match align {
        ColumnAlign::Left => format!("{text}{pad}"),
        ColumnAlign::Right => format!("{pad}{text}"),
    }
}

/// Wrap formatted text to `width`, styling bold segments. Plain segments get
/// currency symbol substitution; bold segments stay verbatim.
fn wrap_formatted(
    text: &str,
    width: usize,
    plain: Style,
    bold: Style,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut words: Vec<(String, bool)> = Vec::new();
    for segment in format::parse_formatted_text(text) {
        match segment {
            Segment::Text(s) => {
                let s = format::format_currency(&s);
                words.extend(s.split_whitespace().map(|w| (w.to_string(), false)));
            }
            Segment::Bold(s) => {
                words.extend(s.split_whitespace().map(|w| (w.to_string(), true)));
            }
        }
    }

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut len = 0usize;
    for (word, is_bold) in words {
        let word_len = word.chars().count();
        let need = if len == 0 { word_len } else { len + 1 + word_len };
        if need > width && len > 0 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            len = 0;
        }
        if len > 0 {
            spans.push(Span::raw(" "));
            len += 1;
        }
        spans.push(Span::styled(word, if is_bold { bold } else { plain }));
        len += word_len;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use reldeck_core::ColumnType;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_table() -> TableBlock {
        let mut column_types = BTreeMap::new();
        column_types.insert(1, ColumnType::Currency);
        column_types.insert(2, ColumnType::Percentage);
        TableBlock {
            title: Some("Store revenue".to_string()),
            headers: vec!["Store".to_string(), "Revenue".to_string(), "Change".to_string()],
            rows: vec![
                vec!["Indiranagar".to_string(), "125000".to_string(), "12.5".to_string()],
                vec!["HSR".to_string(), "98000".to_string(), "-3.2".to_string()],
                vec!["Whitefield".to_string(), "N/A".to_string(), "0".to_string()],
            ],
            column_types,
        }
    }

    #[test]
    fn thought_collapsed_single_line() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::thought("We compared quarters by store.");
        let lines = block_lines(&block, &palette, 60, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "▸ Thought for sometime");
    }

    #[test]
    fn thought_expanded_shows_text() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::thought("We compared quarters by store.");
        let lines = block_lines(&block, &palette, 60, true);
        assert!(lines.len() > 1);
        assert!(line_text(&lines[0]).starts_with("▾"));
        assert!(line_text(&lines[1]).contains("compared quarters"));
    }

    #[test]
    fn heading_applies_currency_formatting() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::heading("Revenue in INR 125000");
        let lines = block_lines(&block, &palette, 60, false);
        assert!(line_text(&lines[0]).contains("₹ 125000"));
    }

    #[test]
    fn paragraph_bold_segment_not_currency_formatted() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::paragraph("**INR stays** but INR here changes");
        let lines = block_lines(&block, &palette, 80, false);
        let text = line_text(&lines[0]);
        assert!(text.contains("INR stays"));
        assert!(text.contains("₹ here") || text.contains("₹here") || text.contains("₹ "));
    }

    #[test]
    fn paragraph_wraps_to_width() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::paragraph("one two three four five six seven eight");
        let lines = block_lines(&block, &palette, 12, false);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_text(line).chars().count() <= 12);
        }
    }

    #[test]
    fn summary_has_fixed_heading_and_bullets() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::summary(vec!["first point".to_string(), "second point".to_string()]);
        let lines = block_lines(&block, &palette, 60, false);
        assert!(line_text(&lines[0]).contains("Summary"));
        assert!(line_text(&lines[1]).starts_with("• "));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn list_title_optional() {
        let palette = DeckPalette::deck_dark();
        let with_title = ContentBlock::List {
            title: Some("Top stores".to_string()),
            items: vec!["HSR".to_string()],
        };
        let lines = block_lines(&with_title, &palette, 60, false);
        assert_eq!(line_text(&lines[0]), "Top stores");

        let without = ContentBlock::List {
            title: None,
            items: vec!["HSR".to_string()],
        };
        let lines = block_lines(&without, &palette, 60, false);
        assert!(line_text(&lines[0]).starts_with("• "));
    }

    #[test]
    fn table_renders_title_header_separator_rows() {
        let palette = DeckPalette::deck_dark();
        let lines = block_lines(&ContentBlock::table(sample_table()), &palette, 80, false);
        assert_eq!(line_text(&lines[0]), "Store revenue");
        assert!(line_text(&lines[1]).contains("Store"));
        assert!(line_text(&lines[2]).starts_with("─"));
        assert_eq!(lines.len(), 3 + 3);
    }

    #[test]
    fn table_currency_cell_abbreviated() {
        let palette = DeckPalette::deck_dark();
        let lines = block_lines(&ContentBlock::table(sample_table()), &palette, 80, false);
        assert!(line_text(&lines[3]).contains("₹125.0K"));
    }

    #[test]
    fn table_percent_trend_glyphs() {
        let palette = DeckPalette::deck_dark();
        let lines = block_lines(&ContentBlock::table(sample_table()), &palette, 80, false);
        assert!(line_text(&lines[3]).contains("▲ 12.50%"));
        assert!(line_text(&lines[4]).contains("▼ -3.20%"));
    }

    #[test]
    fn table_missing_cells_become_placeholder() {
        let palette = DeckPalette::deck_dark();
        let lines = block_lines(&ContentBlock::table(sample_table()), &palette, 80, false);
        // "N/A" revenue and "0" change both collapse to the placeholder.
        let last = line_text(&lines[5]);
        assert!(last.contains("Whitefield"));
        assert_eq!(last.matches('-').count(), 2);
    }

    #[test]
    fn table_without_headers_renders_nothing() {
        let palette = DeckPalette::deck_dark();
        let empty = TableBlock::default();
        let lines = block_lines(&ContentBlock::table(empty), &palette, 80, false);
        assert!(lines.is_empty());
    }

    #[test]
    fn single_value_with_unit() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::SingleValue {
            title: Some("Total revenue".to_string()),
            value: Some("2500000".to_string()),
            unit: Some("this month".to_string()),
            description: None,
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert_eq!(line_text(&lines[0]), "Total revenue");
        assert!(line_text(&lines[1]).contains("2500000"));
        assert!(line_text(&lines[1]).contains("this month"));
    }

    #[test]
    fn single_value_keeps_value_verbatim() {
        // No abbreviation; currency phrases get the symbol substituted.
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::SingleValue {
            title: None,
            value: Some("INR 2500000".to_string()),
            unit: None,
            description: None,
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert_eq!(line_text(&lines[0]), "₹ 2500000");
    }

    #[test]
    fn single_value_null_shows_no_data() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::SingleValue {
            title: None,
            value: None,
            unit: None,
            description: None,
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert_eq!(line_text(&lines[0]), "No data available");
    }

    #[test]
    fn metric_amount_abbreviated_percent_shared() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::MultiMetricDashboard {
            title: "This quarter".to_string(),
            description: "Key numbers".to_string(),
            metrics: vec![
                Metric {
                    name: "Revenue".to_string(),
                    value: "2500000".to_string(),
                    kind: MetricKind::Amount,
                    ..Metric::default()
                },
                Metric {
                    name: "Growth".to_string(),
                    value: "12.5".to_string(),
                    kind: MetricKind::Percent,
                    ..Metric::default()
                },
            ],
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert!(lines.iter().any(|l| line_text(l).contains("₹2.5M")));
        assert!(lines.iter().any(|l| line_text(l).contains("12.50%")));
    }

    #[test]
    fn metric_trend_arrow_requires_both_fields() {
        let palette = DeckPalette::deck_dark();
        let with_both = Metric {
            name: "Growth".to_string(),
            value: "12.5".to_string(),
            trend: Some("+12% vs last month".to_string()),
            trend_direction: Some(TrendDirection::Up),
            ..Metric::default()
        };
        assert!(line_text(&metric_line(&with_both, &palette)).contains("↗"));

        let trend_only = Metric {
            name: "Growth".to_string(),
            value: "12.5".to_string(),
            trend: Some("+12%".to_string()),
            ..Metric::default()
        };
        assert!(!line_text(&metric_line(&trend_only, &palette)).contains("↗"));
    }

    #[test]
    fn single_key_metric_dollar_icon_only() {
        let palette = DeckPalette::deck_dark();
        let block = ContentBlock::SingleKeyMetric {
            title: "Revenue".to_string(),
            description: "All stores".to_string(),
            metric: Metric {
                name: "Total".to_string(),
                value: "98000".to_string(),
                kind: MetricKind::Amount,
                icon: Some("dollar".to_string()),
                ..Metric::default()
            },
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert!(line_text(&lines[1]).starts_with("$ "));

        let block = ContentBlock::SingleKeyMetric {
            title: "Revenue".to_string(),
            description: "All stores".to_string(),
            metric: Metric {
                name: "Total".to_string(),
                value: "98000".to_string(),
                icon: Some("chart".to_string()),
                ..Metric::default()
            },
        };
        let lines = block_lines(&block, &palette, 60, false);
        assert!(!line_text(&lines[1]).starts_with("$ "));
    }

    #[test]
    fn fallback_cards_render_text() {
        let palette = DeckPalette::deck_dark();
        let lines = block_lines(&ContentBlock::unknown("gauge"), &palette, 60, false);
        assert!(line_text(&lines[0]).contains("Unknown data type: gauge"));

        let lines = block_lines(&ContentBlock::unsupported("pie"), &palette, 60, false);
        assert!(line_text(&lines[0]).contains("Unsupported data type: pie"));

        let lines = block_lines(&ContentBlock::invalid("Invalid table data structure"), &palette, 60, false);
        assert!(line_text(&lines[0]).contains("Invalid table data structure"));
    }

    #[test]
    fn follow_ups_numbered_and_capped_at_nine() {
        let palette = DeckPalette::deck_dark();
        let queries: Vec<String> = (0..12).map(|i| format!("query {i}")).collect();
        let lines = follow_up_lines(&queries, &palette);
        assert_eq!(lines.len(), 9);
        assert!(line_text(&lines[0]).starts_with("[1] "));
        assert!(line_text(&lines[0]).ends_with(" ↗"));
    }
}
