//! TUI spacing and sizing constants.
//!
//! Use these when building layout or rendering so padding and spacing stay
//! uniform across the header, chat body, and footer.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for message continuation lines and block content (two spaces).
pub const LEFT_PADDING: &str = "  ";
