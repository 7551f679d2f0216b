//! Toolkit-wide settings: metrics heuristics, scrolling and the flat color palette.

use super::Config;
use crate::foundation::math::{rgba, Color};
use serde::{Deserialize, Serialize};

/// Flat colors widgets pick up when they are created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Panel background
    pub panel: Color,
    /// Hover color of buttons and rich buttons
    pub button_hover: Color,
    /// Pressed color of buttons and rich buttons
    pub pressed: Color,
    /// Hover color of text boxes
    pub text_box_hover: Color,
    /// Background of focused text boxes and bind boxes
    pub focused: Color,
    /// Background of text boxes holding invalid content
    pub invalid: Color,
    /// Track bar background
    pub track_background: Color,
    /// Track bar hover background
    pub track_hover: Color,
    /// Track bar thumb
    pub track: Color,
    /// Check box background
    pub check_background: Color,
    /// Check box fill when checked
    pub check: Color,
    /// Regular text
    pub text: Color,
    /// Placeholder text of empty text boxes
    pub placeholder: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            panel: rgba(0.0, 0.0, 0.0, 0.75),
            button_hover: rgba(0.05, 0.1, 0.15, 0.75),
            pressed: rgba(0.0, 0.0, 0.0, 0.95),
            text_box_hover: rgba(0.05, 0.1, 0.2, 0.75),
            focused: rgba(0.0, 0.0, 0.0, 1.0),
            invalid: rgba(0.1, 0.05, 0.03, 0.75),
            track_background: rgba(0.0, 0.0, 0.0, 0.4),
            track_hover: rgba(0.01, 0.02, 0.03, 0.5),
            track: rgba(1.0, 1.0, 1.0, 0.4),
            check_background: rgba(0.0, 0.0, 0.0, 0.5),
            check: rgba(1.0, 1.0, 1.0, 0.4),
            text: rgba(1.0, 1.0, 1.0, 1.0),
            placeholder: rgba(0.5, 0.5, 0.5, 0.5),
        }
    }
}

/// GUI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Font used by labels that don't name one
    pub default_font: String,
    /// Estimated glyph advance used to size text before a font is available
    pub glyph_width: f32,
    /// Default label height
    pub label_height: f32,
    /// Text line height assumed when sizing text buttons
    pub line_height: f32,
    /// Pixels scrolled per wheel step
    pub scroll_step: f32,
    /// Initial viewport size
    pub viewport: (f32, f32),
    /// Widget colors
    pub palette: Palette,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            default_font: "normal".to_string(),
            glyph_width: 8.0,
            label_height: 15.0,
            line_height: 16.0,
            scroll_step: 40.0,
            viewport: (800.0, 600.0),
            palette: Palette::default(),
        }
    }
}

impl Config for GuiConfig {}
