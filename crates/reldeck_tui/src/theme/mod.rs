//! reldeck theme: semantic color palette for the chat terminal.
//!
//! Colors are grouped by role (surfaces, borders, text, semantic, chrome)
//! rather than by widget, so every renderer pulls from the same small set.
//!
//! # Example
//!
//! ```ignore
//! use reldeck_tui::theme::{Appearance, DeckPalette};
//!
//! let palette = DeckPalette::deck_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = DeckPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::DeckPalette;
pub use rgb::Rgb;
