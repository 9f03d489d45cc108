//! Shared utilities for the reldeck TUI.
//!
//! - **[constants]** — Spacing and padding constants used across layouts.
//! - **[layout]** — Rect padding helpers.
//! - **[format]** — Duration, truncation, and word wrap for rendered lines.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{format_duration, truncate_ellipsis, truncate_with_suffix, wrap_lines};
pub use layout::{horizontal_padding, horizontal_padding_with};
