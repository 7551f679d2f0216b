//! Headless surface and asset table
//!
//! `CommandRecorder` stands in for a GPU batch: it keeps the current tint and
//! texture and records every call as a [`DrawCommand`]. Hosts that render for
//! real translate the command list; tests inspect it.

use super::backend::{Assets, Font, Surface, TextureHandle, TextureInfo};
use super::commands::DrawCommand;
use crate::foundation::math::{Color, Rect};
use std::collections::HashMap;

/// Surface that records draw commands
#[derive(Debug)]
pub struct CommandRecorder {
    color: Color,
    texture: Option<TextureHandle>,
    commands: Vec<DrawCommand>,
    scissor_depth: usize,
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            color: Color::new(1.0, 1.0, 1.0, 1.0),
            texture: None,
            commands: Vec::new(),
            scissor_depth: 0,
        }
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drop recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text runs recorded so far, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    /// Quads recorded so far, in draw order
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(DrawCommand::as_rect)
    }

    /// Number of clip areas currently pushed
    pub fn scissor_depth(&self) -> usize {
        self.scissor_depth
    }
}

impl Surface for CommandRecorder {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect {
            area: Rect::new(x, y, width, height),
            color: self.color,
            texture: self.texture,
        });
    }

    fn draw_text(&mut self, font: &dyn Font, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            font: font.name().to_string(),
            text: text.to_string(),
            x,
            y,
            color: self.color,
        });
    }

    fn push_scissor(&mut self, area: Rect) {
        self.scissor_depth += 1;
        self.commands.push(DrawCommand::PushScissor(area));
    }

    fn pop_scissor(&mut self) {
        if self.scissor_depth == 0 {
            log::warn!("pop_scissor without matching push");
            return;
        }
        self.scissor_depth -= 1;
        self.commands.push(DrawCommand::PopScissor);
    }
}

/// Fixed-advance font metrics
#[derive(Debug, Clone, PartialEq)]
pub struct MonoFont {
    name: String,
    glyph_width: f32,
    line_height: f32,
    y_offset: f32,
}

impl MonoFont {
    /// Create metrics for a monospaced font
    pub fn new(name: impl Into<String>, glyph_width: f32, line_height: f32) -> Self {
        Self {
            name: name.into(),
            glyph_width,
            line_height,
            y_offset: 0.0,
        }
    }

    /// Set the baseline offset
    #[must_use]
    pub fn with_y_offset(mut self, y_offset: f32) -> Self {
        self.y_offset = y_offset;
        self
    }
}

impl Font for MonoFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn calc_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

/// In-memory name table of textures and fonts
#[derive(Default)]
pub struct AssetTable {
    textures: HashMap<String, TextureInfo>,
    fonts: HashMap<String, Box<dyn Font>>,
}

impl AssetTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture
    pub fn insert_texture(&mut self, name: impl Into<String>, info: TextureInfo) {
        self.textures.insert(name.into(), info);
    }

    /// Register a font under its own name
    pub fn insert_font(&mut self, font: impl Font + 'static) {
        self.fonts.insert(font.name().to_string(), Box::new(font));
    }

    /// Builder form of [`insert_font`](Self::insert_font)
    #[must_use]
    pub fn with_font(mut self, font: impl Font + 'static) -> Self {
        self.insert_font(font);
        self
    }

    /// Builder form of [`insert_texture`](Self::insert_texture)
    #[must_use]
    pub fn with_texture(mut self, name: impl Into<String>, info: TextureInfo) -> Self {
        self.insert_texture(name, info);
        self
    }
}

impl Assets for AssetTable {
    fn texture(&self, name: &str) -> Option<TextureInfo> {
        self.textures.get(name).copied()
    }

    fn font(&self, name: &str) -> Option<&dyn Font> {
        self.fonts.get(name).map(|font| font.as_ref())
    }
}

impl std::fmt::Debug for AssetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetTable")
            .field("textures", &self.textures.keys().collect::<Vec<_>>())
            .field("fonts", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::rgba;

    #[test]
    fn test_recorder_applies_current_state() {
        let mut recorder = CommandRecorder::new();
        let red = rgba(1.0, 0.0, 0.0, 1.0);
        recorder.set_color(red);
        recorder.set_texture(Some(TextureHandle(3)));
        recorder.rect(1.0, 2.0, 3.0, 4.0);

        assert_eq!(
            recorder.commands(),
            &[DrawCommand::Rect {
                area: Rect::new(1.0, 2.0, 3.0, 4.0),
                color: red,
                texture: Some(TextureHandle(3)),
            }]
        );
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut recorder = CommandRecorder::new();
        recorder.pop_scissor();
        assert!(recorder.commands().is_empty());

        recorder.push_scissor(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(recorder.scissor_depth(), 1);
        recorder.pop_scissor();
        assert_eq!(recorder.scissor_depth(), 0);
        assert_eq!(recorder.commands().len(), 2);
    }

    #[test]
    fn test_mono_font_metrics() {
        let font = MonoFont::new("normal", 8.0, 16.0).with_y_offset(2.0);
        assert_eq!(font.calc_width("abcd"), 32.0);
        assert_eq!(font.calc_width("ünï"), 24.0);
        assert_eq!(font.y_offset(), 2.0);
    }

    #[test]
    fn test_asset_table_lookup() {
        let info = TextureInfo { handle: TextureHandle(1), width: 64, height: 32 };
        let assets = AssetTable::new()
            .with_font(MonoFont::new("normal", 8.0, 16.0))
            .with_texture("logo", info);

        assert_eq!(assets.texture("logo"), Some(info));
        assert!(assets.texture("missing").is_none());
        assert_eq!(assets.font("normal").map(Font::name), Some("normal"));
        assert!(assets.font("bold").is_none());
    }
}
