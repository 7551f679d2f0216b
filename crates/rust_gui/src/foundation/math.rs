//! Math utilities and types
//!
//! Screen-space vector aliases and a small axis-aligned rectangle type used by
//! layout, hit-testing and the drawing surface.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type (positions and sizes in pixels)
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color with components in `0.0..=1.0`
pub type Color = Vec4;

/// Shorthand constructor for [`Color`]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new(r, g, b, a)
}

/// Axis-aligned rectangle in screen pixels (top-left origin)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from position and size vectors
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Half-open containment test: the right and bottom edges are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// Same rectangle with negative extents clamped to zero
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(109.9, 69.9)));
        assert!(!rect.contains(Vec2::new(110.0, 30.0)));
        assert!(!rect.contains(Vec2::new(50.0, 70.0)));
        assert!(!rect.contains(Vec2::new(5.0, 30.0)));
    }

    #[test]
    fn test_rect_clamped() {
        let rect = Rect::new(0.0, 0.0, -4.0, 3.0).clamped();
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 3.0);
    }
}
