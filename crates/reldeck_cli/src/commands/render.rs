//! `reldeck render` — render a saved reply file without hitting the backend.

use anyhow::{Context, Result};
use reldeck_core::{ContentBlock, SortDirection, blocks_from_value};

use crate::render::print_blocks;

pub fn handle(file: String, sort_by: Option<usize>, desc: bool) -> Result<()> {
    let raw = std::fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {file} as JSON"))?;

    let mut blocks = blocks_from_value(&value);

    // --sort-by reorders the first table in the reply.
    if let Some(column) = sort_by {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        for block in &mut blocks {
            if let ContentBlock::Table(table) = block {
                table.rows = table.sorted_rows(column, direction);
                break;
            }
        }
    }

    print_blocks(&blocks);
    Ok(())
}
