//! Deck palette: semantic color roles for the chat terminal.
//!
//! One struct per appearance. Metric trends and table cells use the semantic
//! colors (success for gains, danger for drops), never raw RGB at call sites.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Card and bar background.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub info: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
    pub scrollbar_thumb_background: Rgb,
    pub scrollbar_thumb_hover_background: Rgb,
    pub scrollbar_track_background: Rgb,
}

impl DeckPalette {
    /// Default deck dark palette (deep blacks, soft blue accent).
    pub fn deck_dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            surface_background: Rgb(16, 17, 24),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_placeholder: Rgb(70, 78, 110),
            text_disabled: Rgb(61, 65, 102),
            accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
            info: Rgb(100, 200, 255),
            status_bar_background: Rgb(16, 17, 24),
            scrollbar_thumb_background: Rgb(61, 65, 102),
            scrollbar_thumb_hover_background: Rgb(86, 95, 137),
            scrollbar_track_background: Rgb(17, 17, 26),
        }
    }

    /// Default deck light palette.
    pub fn deck_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 248, 248),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_placeholder: Rgb(86, 95, 137),
            text_disabled: Rgb(161, 161, 170),
            accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
            warning: Rgb(224, 175, 104),
            info: Rgb(125, 207, 255),
            status_bar_background: Rgb(255, 255, 255),
            scrollbar_thumb_background: Rgb(203, 213, 225),
            scrollbar_thumb_hover_background: Rgb(161, 161, 170),
            scrollbar_track_background: Rgb(248, 248, 248),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::deck_dark(),
            Appearance::Light => Self::deck_light(),
        }
    }
}
