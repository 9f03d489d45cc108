//! Boundary normalization. Assistant replies arrive either as an array of
//! typed blocks or as a legacy single object `{type, title, content}`; both
//! are converted here into one canonical `Vec<ContentBlock>`. Malformed
//! table shapes become `Invalid` blocks and unrecognized types become
//! `Unknown`/`Unsupported`, so rendering never fails on input.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::error;

use crate::block::{ColumnType, ContentBlock, Metric, TableBlock};

pub const INVALID_TABLE_DATA: &str = "Invalid table data structure";
pub const INVALID_TABLE_ROWS: &str = "Invalid table rows structure";

/// Converts a parsed reply payload into canonical blocks. Arrays take the
/// typed-block path; anything else is treated as the legacy object format.
pub fn blocks_from_value(value: &Value) -> Vec<ContentBlock> {
    match value {
        Value::Array(items) => items.iter().map(block_from_item).collect(),
        _ => legacy_blocks(value),
    }
}

fn block_from_item(item: &Value) -> ContentBlock {
    let kind = item.get("type").and_then(Value::as_str).unwrap_or_default();
    match kind {
        "thought" => ContentBlock::Thought {
            text: text_field(item, "text"),
        },
        "heading" => ContentBlock::Heading {
            text: text_field(item, "text"),
        },
        "paragraph" => ContentBlock::Paragraph {
            text: text_field(item, "text"),
        },
        "summary" => ContentBlock::Summary {
            items: string_list(item.get("items")),
        },
        "list" => ContentBlock::List {
            title: opt_text_field(item, "title"),
            items: string_list(item.get("items")),
        },
        "table" => table_block(item),
        "single_value" => ContentBlock::SingleValue {
            title: opt_text_field(item, "title"),
            value: opt_scalar_field(item, "value"),
            unit: opt_text_field(item, "unit"),
            description: opt_scalar_field(item, "description"),
        },
        "multi_metric_dashboard" => ContentBlock::MultiMetricDashboard {
            title: text_field(item, "title"),
            description: text_field(item, "description"),
            metrics: metric_list(item.get("metrics")),
        },
        "single_key_metric" => ContentBlock::SingleKeyMetric {
            title: text_field(item, "title"),
            description: text_field(item, "description"),
            metric: item.get("metric").map(metric_from_value).unwrap_or_default(),
        },
        "follow_up_queries" => ContentBlock::FollowUpQueries {
            queries: string_list(item.get("queries")),
        },
        other => ContentBlock::unknown(other),
    }
}

/// Legacy single-object format: one deep pass replaces literal `\n` escape
/// sequences with real newlines, then the type is dispatched. A legacy
/// title becomes a heading so the output is a flat block sequence.
fn legacy_blocks(value: &Value) -> Vec<ContentBlock> {
    let Some(content) = value.get("content") else {
        return Vec::new();
    };
    let content = unescape_newlines(content);
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .map(|t| t.replace("\\n", "\n"));
    let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();

    let mut blocks = Vec::new();
    if let Some(title) = title.clone() {
        blocks.push(ContentBlock::heading(title));
    }

    match kind {
        "single_value" => blocks.push(legacy_single_value(&content)),
        "table" => blocks.push(table_block(&content)),
        "combined" => {
            if let Some(single_value) = content.get("single_value") {
                blocks.push(legacy_single_value(single_value));
            }
            if let Some(table) = content.get("table") {
                blocks.push(table_block(table));
            }
            if let Some(paragraph) = content.get("paragraph") {
                blocks.push(ContentBlock::paragraph(scalar_text(paragraph)));
            }
        }
        other => {
            if title.is_none() {
                blocks.push(ContentBlock::heading("Unknown Data Type"));
            }
            blocks.push(ContentBlock::unsupported(other));
        }
    }
    blocks
}

// The legacy shape keeps value/unit/description nested under content.
fn legacy_single_value(value: &Value) -> ContentBlock {
    ContentBlock::SingleValue {
        title: None,
        value: opt_scalar_field(value, "value"),
        unit: opt_text_field(value, "unit"),
        description: opt_scalar_field(value, "description"),
    }
}

/// Builds a table block, demoting malformed shapes to `Invalid`. Cells are
/// stringified here so the rest of the system only ever handles strings.
fn table_block(value: &Value) -> ContentBlock {
    let Some(headers) = value.get("headers").and_then(Value::as_array) else {
        error!(table = %value, "malformed table: missing headers array");
        return ContentBlock::invalid(INVALID_TABLE_DATA);
    };
    let Some(rows) = value.get("rows").and_then(Value::as_array) else {
        error!(table = %value, "malformed table: missing rows array");
        return ContentBlock::invalid(INVALID_TABLE_ROWS);
    };

    let headers: Vec<String> = headers.iter().map(scalar_text).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| match row {
            Value::Array(cells) => cells.iter().map(scalar_text).collect(),
            other => vec![scalar_text(other)],
        })
        .collect();

    ContentBlock::table(TableBlock {
        title: opt_text_field(value, "title"),
        headers,
        rows,
        column_types: column_types(value.get("column_types")),
    })
}

// Keys arrive as JSON strings ("0": "currency"); unparsable keys and
// unrecognized type names are dropped, leaving those columns as text.
fn column_types(value: Option<&Value>) -> BTreeMap<usize, ColumnType> {
    let mut types = BTreeMap::new();
    let Some(Value::Object(map)) = value else {
        return types;
    };
    for (key, raw) in map {
        let Ok(index) = key.parse::<usize>() else {
            continue;
        };
        let column_type = match raw.as_str() {
            Some("currency") => ColumnType::Currency,
            Some("amount") => ColumnType::Amount,
            Some("percentage") => ColumnType::Percentage,
            Some("text") => ColumnType::Text,
            _ => continue,
        };
        types.insert(index, column_type);
    }
    types
}

fn metric_list(value: Option<&Value>) -> Vec<Metric> {
    match value {
        Some(Value::Array(items)) => items.iter().map(metric_from_value).collect(),
        _ => Vec::new(),
    }
}

fn metric_from_value(value: &Value) -> Metric {
    serde_json::from_value(value.clone()).unwrap_or_else(|_| Metric {
        name: text_field(value, "name"),
        value: scalar_text(value.get("value").unwrap_or(&Value::Null)),
        ..Metric::default()
    })
}

fn unescape_newlines(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.replace("\\n", "\n")),
        Value::Array(items) => Value::Array(items.iter().map(unescape_newlines).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), unescape_newlines(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn text_field(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_text_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

// Numeric values are stringified once here; null stays None so the
// renderer can show its "No data available" text.
fn opt_scalar_field(value: &Value, field: &str) -> Option<String> {
    match value.get(field) {
        None | Some(Value::Null) => None,
        Some(field_value) => Some(scalar_text(field_value)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_format_in_order() {
        let payload = json!([
            {"type": "heading", "text": "Q3 Results"},
            {"type": "paragraph", "text": "Revenue grew."},
            {"type": "summary", "items": ["one", "two"]},
        ]);
        let blocks = blocks_from_value(&payload);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], ContentBlock::Heading { .. }));
        assert!(matches!(blocks[1], ContentBlock::Paragraph { .. }));
        assert!(matches!(blocks[2], ContentBlock::Summary { .. }));
    }

    #[test]
    fn test_unknown_type_becomes_fallback() {
        let payload = json!([{"type": "gauge", "value": 10}]);
        let blocks = blocks_from_value(&payload);
        assert_eq!(
            blocks[0].fallback_text().as_deref(),
            Some("Unknown data type: gauge")
        );
    }

    #[test]
    fn test_unknown_type_does_not_poison_siblings() {
        let payload = json!([
            {"type": "gauge"},
            {"type": "paragraph", "text": "still here"},
        ]);
        let blocks = blocks_from_value(&payload);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_table_numeric_cells_stringified() {
        let payload = json!([{
            "type": "table",
            "headers": ["Store", "Total"],
            "rows": [["Koramangala", 125000], ["HSR", 98000.5]],
        }]);
        let blocks = blocks_from_value(&payload);
        let ContentBlock::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows[0][1], "125000");
        assert_eq!(table.rows[1][1], "98000.5");
    }

    #[test]
    fn test_table_missing_headers_is_invalid() {
        let payload = json!([{"type": "table", "rows": [["a"]]}]);
        let blocks = blocks_from_value(&payload);
        assert_eq!(
            blocks[0].fallback_text().as_deref(),
            Some(INVALID_TABLE_DATA)
        );
    }

    #[test]
    fn test_table_missing_rows_is_invalid() {
        let payload = json!([{"type": "table", "headers": ["a"], "rows": "nope"}]);
        let blocks = blocks_from_value(&payload);
        assert_eq!(
            blocks[0].fallback_text().as_deref(),
            Some(INVALID_TABLE_ROWS)
        );
    }

    #[test]
    fn test_column_types_bad_keys_ignored() {
        let payload = json!([{
            "type": "table",
            "headers": ["a", "b", "c"],
            "rows": [],
            "column_types": {"1": "currency", "x": "percentage", "2": "sideways"},
        }]);
        let blocks = blocks_from_value(&payload);
        let ContentBlock::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.column_types.len(), 1);
        assert_eq!(table.column_types.get(&1), Some(&ColumnType::Currency));
    }

    #[test]
    fn test_single_value_null_stays_none() {
        let payload = json!([{"type": "single_value", "title": "Net", "value": null}]);
        let blocks = blocks_from_value(&payload);
        let ContentBlock::SingleValue { value, .. } = &blocks[0] else {
            panic!("expected single_value");
        };
        assert!(value.is_none());
    }

    #[test]
    fn test_follow_up_queries_collected() {
        let payload = json!([{"type": "follow_up_queries", "queries": ["q1", "q2"]}]);
        let blocks = blocks_from_value(&payload);
        let ContentBlock::FollowUpQueries { queries } = &blocks[0] else {
            panic!("expected follow_up_queries");
        };
        assert_eq!(queries, &vec!["q1".to_string(), "q2".to_string()]);
    }

    #[test]
    fn test_legacy_single_value() {
        let payload = json!({
            "type": "single_value",
            "title": "Total Revenue",
            "content": {"value": 250000, "unit": "INR", "description": "This month"},
        });
        let blocks = blocks_from_value(&payload);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], ContentBlock::Heading { .. }));
        let ContentBlock::SingleValue { value, unit, description, .. } = &blocks[1] else {
            panic!("expected single_value");
        };
        assert_eq!(value.as_deref(), Some("250000"));
        assert_eq!(unit.as_deref(), Some("INR"));
        assert_eq!(description.as_deref(), Some("This month"));
    }

    #[test]
    fn test_legacy_combined_fixed_order() {
        let payload = json!({
            "type": "combined",
            "title": "Overview",
            "content": {
                "paragraph": "Trailing note",
                "table": {"headers": ["a"], "rows": [["1"]]},
                "single_value": {"value": "10", "unit": "stores"},
            },
        });
        let blocks = blocks_from_value(&payload);
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], ContentBlock::Heading { .. }));
        assert!(matches!(blocks[1], ContentBlock::SingleValue { .. }));
        assert!(matches!(blocks[2], ContentBlock::Table(_)));
        assert!(matches!(blocks[3], ContentBlock::Paragraph { .. }));
    }

    #[test]
    fn test_legacy_unescapes_newlines() {
        let payload = json!({
            "type": "combined",
            "title": "Line\\nbreak",
            "content": {"paragraph": "first\\nsecond"},
        });
        let blocks = blocks_from_value(&payload);
        let ContentBlock::Heading { text } = &blocks[0] else {
            panic!("expected heading");
        };
        assert_eq!(text, "Line\nbreak");
        let ContentBlock::Paragraph { text } = &blocks[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn test_legacy_unknown_type() {
        let payload = json!({"type": "pie", "title": "Chart", "content": {}});
        let blocks = blocks_from_value(&payload);
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1].fallback_text().as_deref(),
            Some("Unsupported data type: pie")
        );
    }

    #[test]
    fn test_legacy_unknown_type_without_title() {
        let payload = json!({"type": "pie", "content": {}});
        let blocks = blocks_from_value(&payload);
        let ContentBlock::Heading { text } = &blocks[0] else {
            panic!("expected heading");
        };
        assert_eq!(text, "Unknown Data Type");
    }

    #[test]
    fn test_legacy_without_content_is_empty() {
        let payload = json!({"type": "single_value", "title": "orphan"});
        assert!(blocks_from_value(&payload).is_empty());
    }
}
