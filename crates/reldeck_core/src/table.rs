//! Derived table logic: column alignment, per-cell display classification,
//! sorting, and the per-column width budget used by terminal layout.

use serde::{Deserialize, Serialize};

use crate::block::{ColumnType, TableBlock};
use crate::format::{self, CellPolicy, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    pub index: usize,
    pub align: ColumnAlign,
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Trend from the sign of a percentage value. Zero and unparsable
    /// values are flat.
    pub fn from_value(raw: &str) -> Self {
        match format::parse_leading_number(raw.trim()) {
            Some(num) if num < 0.0 => Trend::Down,
            Some(num) if num > 0.0 => Trend::Up,
            _ => Trend::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// How one cell should be presented. Classification happens here; drawing
/// glyphs and colors is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    Placeholder,
    Currency(String),
    Percent { text: String, trend: Trend },
    Formatted(Vec<Segment>),
}

impl TableBlock {
    pub fn column_type(&self, index: usize) -> ColumnType {
        self.column_types.get(&index).copied().unwrap_or_default()
    }

    /// One column per header, numeric columns right-aligned.
    pub fn columns(&self) -> Vec<Column> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let column_type = self.column_type(index);
                let align = if column_type == ColumnType::Text {
                    ColumnAlign::Left
                } else {
                    ColumnAlign::Right
                };
                Column {
                    title: title.clone(),
                    index,
                    align,
                    column_type,
                }
            })
            .collect()
    }

    /// Classifies one cell for display. Missing cells (per policy) become
    /// the placeholder; currency columns abbreviate; percentage columns get
    /// two decimals plus a trend; text columns get symbol substitution and
    /// bold segmentation.
    pub fn display_cell(&self, row: &[String], index: usize, policy: CellPolicy) -> CellDisplay {
        let text = row.get(index).map(String::as_str).unwrap_or_default();
        if format::is_missing_cell(text, policy) {
            return CellDisplay::Placeholder;
        }
        match self.column_type(index) {
            ColumnType::Currency | ColumnType::Amount => {
                CellDisplay::Currency(format::format_short_currency(text))
            }
            ColumnType::Percentage => {
                let text = format::format_percent(text);
                let trend = Trend::from_value(&text);
                CellDisplay::Percent { text, trend }
            }
            ColumnType::Text => CellDisplay::Formatted(format::parse_formatted_text(
                &format::format_currency(text),
            )),
        }
    }

    /// Rows sorted by one column with the shared comparator. No sort is
    /// applied unless asked for; the incoming row order is the default.
    pub fn sorted_rows(&self, column: usize, direction: SortDirection) -> Vec<Vec<String>> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            let left = a.get(column).map(String::as_str).unwrap_or_default();
            let right = b.get(column).map(String::as_str).unwrap_or_default();
            let ordering = format::compare_cells(left, right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

/// Per-column character budget by column count. Wide tables trade cell
/// width for fitting all columns on screen.
pub fn column_budget(count: usize) -> u16 {
    match count {
        0..=2 => 40,
        3 => 28,
        4 => 22,
        5 => 18,
        6 => 15,
        7 => 13,
        8 => 11,
        _ => 10,
    }
}
