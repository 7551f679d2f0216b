//! Recorded draw commands

use super::backend::TextureHandle;
use crate::foundation::math::{Color, Rect};

/// Draw call captured by a [`CommandRecorder`](super::CommandRecorder)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid or textured quad
    Rect {
        /// Screen area
        area: Rect,
        /// Tint
        color: Color,
        /// Bound texture
        texture: Option<TextureHandle>,
    },
    /// Text run
    Text {
        /// Font name
        font: String,
        /// Text content
        text: String,
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Text color
        color: Color,
    },
    /// Clip area pushed
    PushScissor(Rect),
    /// Clip area popped
    PopScissor,
}

impl DrawCommand {
    /// Text content if this is a text command
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Area if this is a quad
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            Self::Rect { area, .. } => Some(*area),
            _ => None,
        }
    }
}
