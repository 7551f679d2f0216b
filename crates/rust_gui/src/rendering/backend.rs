//! Render surface and asset lookup traits
//!
//! Defines the interface between the GUI and rendering backends. The GUI never
//! creates or destroys GPU resources; it only tints, binds and emits quads.

use crate::foundation::math::{Color, Rect};

/// Opaque handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Resolved texture and its native size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Backend handle
    pub handle: TextureHandle,
    /// Native width in pixels
    pub width: u32,
    /// Native height in pixels
    pub height: u32,
}

/// Font metrics used for measuring and placing text
pub trait Font {
    /// Name the font was registered under
    fn name(&self) -> &str;

    /// Width of `text` in pixels
    fn calc_width(&self, text: &str) -> f32;

    /// Line height in pixels
    fn line_height(&self) -> f32;

    /// Vertical offset applied to the baseline
    fn y_offset(&self) -> f32;
}

/// Backend-agnostic drawing surface
///
/// Stateful like an immediate-mode batch: `set_color` and `set_texture` apply
/// to every following `rect` and `draw_text` call.
pub trait Surface {
    /// Set the current tint
    fn set_color(&mut self, color: Color);

    /// Bind a texture for following quads (`None` = flat color)
    fn set_texture(&mut self, texture: Option<TextureHandle>);

    /// Emit a quad
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Emit text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, font: &dyn Font, text: &str, x: f32, y: f32);

    /// Restrict drawing to `area` (nested areas intersect)
    fn push_scissor(&mut self, area: Rect);

    /// Restore the previous clip area
    fn pop_scissor(&mut self);
}

/// Name-based texture and font lookup
pub trait Assets {
    /// Resolve a texture by name
    fn texture(&self, name: &str) -> Option<TextureInfo>;

    /// Resolve a font by name
    fn font(&self, name: &str) -> Option<&dyn Font>;
}
