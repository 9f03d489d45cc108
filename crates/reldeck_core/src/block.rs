use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Formatting hint for a table column. Absent entries default to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Currency,
    Amount,
    Percentage,
    #[default]
    Text,
}

impl ColumnType {
    /// Currency and amount columns share abbreviation and alignment rules.
    pub fn is_currency(self) -> bool {
        matches!(self, ColumnType::Currency | ColumnType::Amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Amount,
    #[default]
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

/// One card on a metric dashboard. The trend tag is only shown when both
/// `trend` and `trend_direction` are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: MetricKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_direction: Option<TrendDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        with = "column_type_keys"
    )]
    pub column_types: BTreeMap<usize, ColumnType>,
}

// JSON map keys are always strings ("1": "currency"), so the index map
// crosses serde as string-keyed. Unparsable keys are dropped, matching the
// normalization path.
mod column_type_keys {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::ColumnType;

    pub fn serialize<S>(
        map: &BTreeMap<usize, ColumnType>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(index, ty)| (index.to_string(), ty)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<usize, ColumnType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, ColumnType>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, ty)| key.parse::<usize>().ok().map(|index| (index, ty)))
            .collect())
    }
}

/// Canonical unit of assistant output. Replies arrive as JSON block
/// sequences; `normalize::blocks_from_value` converts both the array format
/// and the legacy single-object format into this type, so everything past
/// that boundary matches exhaustively on a closed enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Thought {
        text: String,
    },
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Summary {
        items: Vec<String>,
    },
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
    },
    Table(TableBlock),
    SingleValue {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        value: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    MultiMetricDashboard {
        title: String,
        description: String,
        metrics: Vec<Metric>,
    },
    SingleKeyMetric {
        title: String,
        description: String,
        metric: Metric,
    },
    FollowUpQueries {
        queries: Vec<String>,
    },
    /// Malformed table shape caught at normalization time. Carries the
    /// message shown in the error card.
    Invalid {
        message: String,
    },
    /// Unrecognized block type from the array format.
    Unknown {
        kind: String,
    },
    /// Unrecognized type from the legacy single-object format.
    Unsupported {
        kind: String,
    },
}

impl ContentBlock {
    pub fn thought(text: impl Into<String>) -> Self {
        ContentBlock::Thought { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn summary(items: Vec<String>) -> Self {
        ContentBlock::Summary { items }
    }

    pub fn table(table: TableBlock) -> Self {
        ContentBlock::Table(table)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ContentBlock::Invalid {
            message: message.into(),
        }
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        ContentBlock::Unknown { kind: kind.into() }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        ContentBlock::Unsupported { kind: kind.into() }
    }

    /// Text shown for the fallback variants.
    pub fn fallback_text(&self) -> Option<String> {
        match self {
            ContentBlock::Invalid { message } => Some(message.clone()),
            ContentBlock::Unknown { kind } => Some(format!("Unknown data type: {kind}")),
            ContentBlock::Unsupported { kind } => Some(format!("Unsupported data type: {kind}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_heading_roundtrip() {
        let block = ContentBlock::heading("**Q3** revenue");
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""type":"heading"#));

        let decoded: ContentBlock = serde_json::from_str(&json).unwrap();
        assert!(matches!(decoded, ContentBlock::Heading { .. }));
    }

    #[test]
    fn test_block_table_roundtrip() {
        let mut column_types = BTreeMap::new();
        column_types.insert(1, ColumnType::Currency);
        let block = ContentBlock::table(TableBlock {
            title: Some("Revenue".to_string()),
            headers: vec!["Store".to_string(), "Total".to_string()],
            rows: vec![vec!["Indiranagar".to_string(), "125000".to_string()]],
            column_types,
        });

        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""type":"table"#));
        assert!(json.contains(r#""1":"currency"#));

        let decoded: ContentBlock = serde_json::from_str(&json).unwrap();
        let ContentBlock::Table(table) = decoded else {
            panic!("expected table variant");
        };
        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.column_types.get(&1), Some(&ColumnType::Currency));
    }

    #[test]
    fn test_table_column_types_deserialize_string_keys() {
        let json = r#"{
            "type": "table",
            "headers": ["Store", "Total"],
            "rows": [["Indiranagar", "125000"]],
            "column_types": {"1": "currency", "x": "amount"}
        }"#;
        let decoded: ContentBlock = serde_json::from_str(json).unwrap();
        let ContentBlock::Table(table) = decoded else {
            panic!("expected table variant");
        };
        assert_eq!(table.column_types.get(&1), Some(&ColumnType::Currency));
        // Unparsable keys are dropped, not an error.
        assert_eq!(table.column_types.len(), 1);
    }

    #[test]
    fn test_metric_kind_defaults_to_percent() {
        let metric: Metric = serde_json::from_str(r#"{"name":"Growth","value":"12.5"}"#).unwrap();
        assert_eq!(metric.kind, MetricKind::Percent);
    }

    #[test]
    fn test_metric_trend_roundtrip() {
        let json = r#"{"name":"Revenue","value":"2500000","type":"amount","trend":"+12%","trend_direction":"up"}"#;
        let metric: Metric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.kind, MetricKind::Amount);
        assert_eq!(metric.trend_direction, Some(TrendDirection::Up));
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(
            ContentBlock::unknown("gauge").fallback_text().as_deref(),
            Some("Unknown data type: gauge")
        );
        assert_eq!(
            ContentBlock::unsupported("pie").fallback_text().as_deref(),
            Some("Unsupported data type: pie")
        );
        assert_eq!(
            ContentBlock::invalid("Invalid table data structure")
                .fallback_text()
                .as_deref(),
            Some("Invalid table data structure")
        );
        assert!(ContentBlock::paragraph("text").fallback_text().is_none());
    }

    #[test]
    fn test_column_type_is_currency() {
        assert!(ColumnType::Currency.is_currency());
        assert!(ColumnType::Amount.is_currency());
        assert!(!ColumnType::Percentage.is_currency());
        assert!(!ColumnType::Text.is_currency());
    }
}
