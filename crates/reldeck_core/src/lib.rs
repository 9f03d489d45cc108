pub mod block;
pub mod event;
pub mod format;
pub mod normalize;
pub mod reply;
pub mod table;

pub use block::{ColumnType, ContentBlock, Metric, MetricKind, TableBlock, TrendDirection};
pub use event::ChatEvent;
pub use format::{CellPolicy, Segment};
pub use normalize::blocks_from_value;
pub use reply::ChatReply;
pub use table::{CellDisplay, Column, ColumnAlign, SortDirection, Trend};
