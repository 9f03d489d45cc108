//! Plain-terminal rendering of reply blocks for `ask` and `render`.
//!
//! The TUI has its own ratatui renderer; this one targets stdout with
//! `console` styling and `comfy-table` for tabular blocks.

use comfy_table::{Cell, CellAlignment, Color};
use console::style;
use reldeck_core::format::{
    CellPolicy, Segment, format_currency, format_percent, format_short_currency,
    parse_formatted_text,
};
use reldeck_core::{CellDisplay, ColumnAlign, ContentBlock, Metric, MetricKind, TableBlock, Trend,
    TrendDirection};

use crate::output;

/// Print a sequence of blocks, one per reply, with a blank line between them.
pub fn print_blocks(blocks: &[ContentBlock]) {
    let mut first = true;
    for block in blocks {
        if !first {
            println!();
        }
        first = false;
        print_block(block);
    }
}

fn print_block(block: &ContentBlock) {
    match block {
        ContentBlock::Thought { text } => {
            output::dim("▸ Thought for sometime");
            for line in text.lines() {
                output::dim(&format!("  {line}"));
            }
        }
        ContentBlock::Heading { text } => {
            output::header(&inline_text(text));
        }
        ContentBlock::Paragraph { text } => {
            println!("{}", inline_styled(text));
        }
        ContentBlock::Summary { items } => {
            output::header("◈ Summary");
            for item in items {
                println!("  {} {}", style("•").dim(), inline_styled(item));
            }
        }
        ContentBlock::List { title, items } => {
            if let Some(title) = title {
                output::header(&inline_text(title));
            }
            for item in items {
                println!("  {} {}", style("•").dim(), inline_styled(item));
            }
        }
        ContentBlock::Table(table) => print_table(table),
        ContentBlock::SingleValue {
            title,
            value,
            unit,
            description,
        } => {
            if let Some(title) = title {
                output::dim(title);
            }
            match value {
                Some(value) => {
                    // Verbatim value, no abbreviation.
                    let mut line = format!("{}", style(inline_text(value)).bold());
                    if let Some(unit) = unit {
                        line.push_str(&format!(" {}", style(unit).dim()));
                    }
                    println!("{line}");
                }
                None => output::dim("No data available"),
            }
            if let Some(description) = description {
                output::dim(description);
            }
        }
        ContentBlock::MultiMetricDashboard {
            title,
            description,
            metrics,
        } => {
            output::header(title);
            output::dim(description);
            for metric in metrics {
                print_metric(metric);
            }
        }
        ContentBlock::SingleKeyMetric {
            title,
            description,
            metric,
        } => {
            output::header(title);
            output::dim(description);
            print_metric(metric);
        }
        ContentBlock::FollowUpQueries { queries } => {
            for (i, query) in queries.iter().enumerate().take(9) {
                println!("  {} {} ↗", style(format!("[{}]", i + 1)).cyan(), query);
            }
        }
        ContentBlock::Invalid { .. }
        | ContentBlock::Unknown { .. }
        | ContentBlock::Unsupported { .. } => {
            if let Some(text) = block.fallback_text() {
                output::warning(&text);
            }
        }
    }
}

fn print_metric(metric: &Metric) {
    let value = match metric.kind {
        MetricKind::Amount => format_short_currency(&metric.value),
        MetricKind::Percent => format_percent(&metric.value),
    };
    let mut line = format!("  {} {}", style(value).bold(), style(&metric.name).dim());
    if let (Some(trend), Some(direction)) = (&metric.trend, &metric.trend_direction) {
        let arrow = match direction {
            TrendDirection::Up => style(format!("↗ {trend}")).green(),
            TrendDirection::Down => style(format!("↘ {trend}")).red(),
        };
        line.push_str(&format!("  {arrow}"));
    }
    println!("{line}");
}

fn print_table(table: &TableBlock) {
    let columns = table.columns();
    if columns.is_empty() {
        return;
    }
    if let Some(title) = &table.title {
        output::header(title);
    }
    let mut out = output::table();
    out.set_header(
        columns
            .iter()
            .map(|c| output::table_header_cell(&c.title))
            .collect::<Vec<_>>(),
    );
    let policy = CellPolicy::default();
    for row in &table.rows {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|col| {
                let alignment = match col.align {
                    ColumnAlign::Left => CellAlignment::Left,
                    ColumnAlign::Right => CellAlignment::Right,
                };
                match table.display_cell(row, col.index, policy) {
                    CellDisplay::Placeholder => Cell::new("-").set_alignment(alignment),
                    CellDisplay::Currency(text) => Cell::new(text).set_alignment(alignment),
                    CellDisplay::Percent { text, trend } => {
                        let (glyph, color) = match trend {
                            Trend::Up => ("▲", Color::Green),
                            Trend::Down => ("▼", Color::Red),
                            Trend::Flat => ("–", Color::Grey),
                        };
                        Cell::new(format!("{glyph} {text}"))
                            .fg(color)
                            .set_alignment(alignment)
                    }
                    CellDisplay::Formatted(segments) => {
                        let text: String =
                            segments.iter().map(|s| s.content()).collect::<String>();
                        Cell::new(text).set_alignment(alignment)
                    }
                }
            })
            .collect();
        out.add_row(cells);
    }
    if output::is_json() {
        output::json_pretty(&serde_json::json!({
            "title": table.title,
            "headers": table.headers,
            "rows": table.rows,
        }));
    } else {
        println!("{out}");
    }
}

/// Inline formatting flattened to plain text: `**bold**` markers dropped,
/// currency phrases substituted in plain runs.
fn inline_text(text: &str) -> String {
    parse_formatted_text(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => format_currency(&t),
            Segment::Bold(t) => t,
        })
        .collect()
}

/// Inline formatting with console styling: bold runs stay bold, currency
/// phrases substituted in plain runs only.
fn inline_styled(text: &str) -> String {
    parse_formatted_text(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => format_currency(&t),
            Segment::Bold(t) => format!("{}", style(t).bold()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_drops_bold_markers_and_formats_currency() {
        assert_eq!(
            inline_text("Revenue **grew** in INR 125000"),
            "Revenue grew in ₹ 125000"
        );
    }

    #[test]
    fn inline_text_keeps_bold_content_verbatim() {
        // Currency substitution applies to plain runs only.
        assert_eq!(inline_text("**INR 5000** total"), "INR 5000 total");
    }
}
