//! Text label

use crate::foundation::math::Vec2;
use crate::ui::node::Align;
use crate::ui::widget::{DrawCx, Supplier, Widget, WidgetCx};

/// Single line of text
///
/// Non-interactive. Text is measured at draw time, so alignment follows the
/// current text and box size.
pub struct Label {
    text: String,
    font: Option<String>,
    align: Align,
    supplier: Option<Supplier<String>>,
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("text", &self.text)
            .field("font", &self.font)
            .field("align", &self.align)
            .field("supplier", &self.supplier.is_some())
            .finish()
    }
}

impl Label {
    /// Create a label using the default font
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            align: Align::Left,
            supplier: None,
        }
    }

    /// Use a named font
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Horizontal alignment
    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Pull the text from `supplier` on every draw
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Fn() -> String + 'static) -> Self {
        self.supplier = Some(Box::new(supplier));
        self
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text (overridden on the next draw when a supplier is set)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Horizontal alignment
    pub fn align(&self) -> Align {
        self.align
    }

    /// Set horizontal alignment
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Set or clear the text supplier
    pub fn set_supplier(&mut self, supplier: Option<Supplier<String>>) {
        self.supplier = supplier;
    }

    /// Font name (resolved to the configured default at init)
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }
}

impl Widget for Label {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let config = cx.config();
        let size = Vec2::new(
            self.text.chars().count() as f32 * config.glyph_width,
            config.label_height,
        );
        let color = config.palette.text;
        if self.font.is_none() {
            self.font = Some(config.default_font.clone());
        }
        let node = cx.node_mut();
        node.size = size;
        node.color = color;
        node.interactive = false;
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        if let Some(supplier) = &self.supplier {
            self.text = supplier();
        }
        let Some(font) = self.font.as_deref().and_then(|name| cx.font(name)) else {
            return;
        };

        let coord = cx.coord();
        let node = cx.node();
        let (size, color) = (node.size, node.color);
        let text_size = Vec2::new(font.calc_width(&self.text), font.line_height() + font.y_offset());
        let x = coord.x + (size.x - text_size.x) * self.align.factor();
        let y = coord.y + (size.y - text_size.y) * 0.5;

        cx.surface.set_texture(None);
        cx.surface.set_color(color);
        cx.surface.draw_text(font, &self.text, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::DrawCommand;
    use crate::tests::support;

    #[test]
    fn test_default_size_from_text_length() {
        let mut gui = support::gui();
        let label = gui.spawn(Label::new("hello"));
        let node = gui.node(label).unwrap();
        assert_eq!(node.size, Vec2::new(40.0, 15.0));
        assert!(!node.interactive);
    }

    #[test]
    fn test_alignment() {
        let mut gui = support::gui();
        let left = gui.spawn(Label::new("ab"));
        let center = gui.spawn(Label::new("ab").with_align(Align::Center));
        let right = gui.spawn(Label::new("ab").with_align(Align::Right));
        for (i, &label) in [left, center, right].iter().enumerate() {
            gui.add_at(gui.root(), label, Vec2::new(0.0, i as f32 * 40.0)).unwrap();
            gui.node_mut(label).unwrap().size = Vec2::new(100.0, 36.0);
        }

        let recorder = support::draw(&mut gui);
        let xs: Vec<(f32, f32)> = recorder
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        // text width 16, line height 16
        assert_eq!(xs, vec![(0.0, 10.0), (42.0, 50.0), (84.0, 90.0)]);
    }

    #[test]
    fn test_supplier_overrides_set_text() {
        let mut gui = support::gui();
        let label = gui.spawn(Label::new("initial").with_supplier(|| "X".to_string()));
        gui.add(label).unwrap();
        gui.widget_mut::<Label>(label).unwrap().set_text("local");

        let recorder = support::draw(&mut gui);
        assert_eq!(recorder.texts().collect::<Vec<_>>(), vec!["X"]);
        assert_eq!(gui.widget::<Label>(label).unwrap().text(), "X");
    }

    #[test]
    fn test_missing_font_skips_drawing() {
        let mut gui = support::gui();
        let label = gui.spawn(Label::new("text").with_font("missing"));
        gui.add(label).unwrap();

        let recorder = support::draw(&mut gui);
        assert_eq!(recorder.texts().count(), 0);
    }
}
