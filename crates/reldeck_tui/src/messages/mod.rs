//! Message rendering for the TUI. Uses crate::theme for colors.
//!
//! - **user** — User query lines (accent border + indicator).
//! - **bot** — Assistant reply: block stack plus numbered follow-ups.
//! - **error** — Inline error lines (✗ icon, danger style).

pub mod bot;
pub mod error;
pub mod user;
