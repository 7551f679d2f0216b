//! Textured quad

use crate::foundation::math::Vec2;
use crate::ui::widget::{DrawCx, Widget, WidgetCx};

/// Image drawn from a named texture
///
/// With auto-resize on, the node takes the texture's native size on the
/// `act` following the first draw that resolves the texture, and parents
/// never stretch it; otherwise the texture is stretched over the node.
#[derive(Debug, Clone)]
pub struct Image {
    texture: String,
    size: Vec2,
    auto_resize: bool,
    /// Native size of the last resolved texture
    native: Option<Vec2>,
}

impl Image {
    /// Create an image of the given size
    pub fn new(texture: impl Into<String>, size: Vec2) -> Self {
        Self {
            texture: texture.into(),
            size,
            auto_resize: false,
            native: None,
        }
    }

    /// Follow the texture's native size
    #[must_use]
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    /// Texture name
    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Switch texture
    pub fn set_texture(&mut self, texture: impl Into<String>) {
        self.texture = texture.into();
        self.native = None;
    }

    /// Whether the node follows the texture size
    pub fn is_auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Toggle auto-resize
    pub fn set_auto_resize(&mut self, auto_resize: bool) {
        self.auto_resize = auto_resize;
    }
}

impl Widget for Image {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let node = cx.node_mut();
        node.size = self.size;
        node.interactive = false;
        node.resizing = !self.auto_resize;
    }

    fn act(&mut self, cx: &mut WidgetCx<'_>, _delta: f32) {
        if !self.auto_resize {
            return;
        }
        let Some(native) = self.native else { return };
        cx.node_mut().resizing = false;
        if cx.node().size != native {
            let id = cx.id();
            cx.gui().set_size(id, native);
        }
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let Some(texture) = cx.assets.texture(&self.texture) else {
            log::trace!("Texture '{}' not found, skipping image", self.texture);
            return;
        };
        self.native = Some(Vec2::new(texture.width as f32, texture.height as f32));

        let coord = cx.coord();
        let node = cx.node();
        let (size, color) = (node.size, node.color);
        cx.surface.set_texture(Some(texture.handle));
        cx.surface.set_color(color);
        cx.surface.rect(coord.x, coord.y, size.x.max(0.0), size.y.max(0.0));
        cx.surface.set_texture(None);
    }
}
