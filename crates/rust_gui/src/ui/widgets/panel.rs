//! Panel: padded container with a background, stacking its children
//!
//! Panels grow to fit their content: the width never shrinks below the
//! content, and in vertical mode the height follows the stacked children
//! (capped by `max_length`, past which the panel scrolls).

use crate::foundation::math::Vec2;
use crate::ui::container::ContainerState;
use crate::ui::node::{Insets, Orientation};
use crate::ui::widget::{DrawCx, Widget, WidgetCx};

/// Padding panels get unless told otherwise
pub const DEFAULT_PADDING: Insets = Insets::uniform(2.0);

/// Background panel with automatic layout
#[derive(Debug, Clone)]
pub struct Panel {
    size: Vec2,
    padding: Insets,
    interval: f32,
    orientation: Orientation,
    max_length: Option<f32>,
}

impl Panel {
    /// Create a vertical panel
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            padding: DEFAULT_PADDING,
            interval: 0.0,
            orientation: Orientation::Vertical,
            max_length: None,
        }
    }

    /// Inner spacing
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Spacing between children
    #[must_use]
    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = interval;
        self
    }

    /// Stacking axis
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Height cap; longer content scrolls
    #[must_use]
    pub fn with_max_length(mut self, max_length: f32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl Widget for Panel {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let color = cx.config().palette.panel;
        let node = cx.node_mut();
        node.size = self.size;
        node.color = color;
        node.hover_color = color;
        node.pressed_color = color;
        node.container = Some(ContainerState {
            orientation: Some(self.orientation),
            padding: self.padding,
            interval: self.interval,
            max_length: self.max_length,
            fit_content: true,
            ..ContainerState::new()
        });
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let color = cx.node().state_color();
        if color.w > 0.0 {
            cx.fill(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support;
    use crate::ui::widgets::Container;

    fn block(gui: &mut crate::ui::Gui, height: f32) -> crate::ui::NodeId {
        gui.spawn(Container::new(Vec2::new(10.0, height)))
    }

    #[test]
    fn test_vertical_layout_with_margins() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(200.0, 10.0)).with_interval(4.0));
        let a = block(&mut gui, 20.0);
        let b = block(&mut gui, 30.0);
        gui.node_mut(b).unwrap().margin = Insets::new(5.0, 3.0, 5.0, 1.0);
        gui.add_to(panel, a).unwrap();
        gui.add_to(panel, b).unwrap();

        let a_node = gui.node(a).unwrap();
        assert_eq!(a_node.position, Vec2::new(2.0, 2.0));
        assert_eq!(a_node.size.x, 196.0);

        let b_node = gui.node(b).unwrap();
        // 2 (padding) + 20 + 4 (interval) + 3 (margin)
        assert_eq!(b_node.position, Vec2::new(7.0, 29.0));
        assert_eq!(b_node.size.x, 186.0);

        // 29 + 30 + 1 + 4 + 2
        let panel_node = gui.node(panel).unwrap();
        assert_eq!(panel_node.container().unwrap().actual_length(), 66.0);
        assert_eq!(panel_node.size, Vec2::new(200.0, 66.0));
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(120.0, 0.0)).with_interval(2.0));
        let children: Vec<_> = (0..3).map(|i| block(&mut gui, 10.0 + i as f32)).collect();
        for &child in &children {
            gui.add_to(panel, child).unwrap();
        }

        let before: Vec<_> = children.iter().map(|&c| gui.node(c).unwrap().position).collect();
        gui.refresh(panel);
        gui.refresh(panel);
        let after: Vec<_> = children.iter().map(|&c| gui.node(c).unwrap().position).collect();
        assert_eq!(before, after);
        assert_eq!(gui.node(panel).unwrap().size.y, 2.0 + 10.0 + 11.0 + 12.0 + 3.0 * 2.0 + 2.0);
    }

    #[test]
    fn test_horizontal_layout() {
        let mut gui = support::gui();
        let panel = gui.spawn(
            Panel::new(Vec2::new(50.0, 20.0))
                .with_orientation(Orientation::Horizontal)
                .with_padding(Insets::zero()),
        );
        let a = gui.spawn(Container::new(Vec2::new(30.0, 10.0)));
        let b = gui.spawn(Container::new(Vec2::new(40.0, 25.0)));
        gui.node_mut(b).unwrap().margin = Insets::new(5.0, 0.0, 0.0, 0.0);
        gui.add_to(panel, a).unwrap();
        gui.add_to(panel, b).unwrap();

        assert_eq!(gui.node(b).unwrap().position, Vec2::new(35.0, 0.0));
        // Horizontal layout never stretches children
        assert_eq!(gui.node(a).unwrap().size, Vec2::new(30.0, 10.0));
        assert_eq!(gui.node(panel).unwrap().size, Vec2::new(75.0, 25.0));
    }

    #[test]
    fn test_max_length_caps_height() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(100.0, 0.0)).with_max_length(50.0));
        for _ in 0..4 {
            let child = block(&mut gui, 30.0);
            gui.add_to(panel, child).unwrap();
        }
        let node = gui.node(panel).unwrap();
        assert_eq!(node.size.y, 50.0);
        assert_eq!(node.container().unwrap().actual_length(), 124.0);
    }

    #[test]
    fn test_padding_larger_than_size_clamps_child_width() {
        let mut gui = support::gui();
        let panel = gui.spawn(Panel::new(Vec2::new(3.0, 0.0)).with_padding(Insets::uniform(4.0)));
        let child = block(&mut gui, 5.0);
        gui.add_to(panel, child).unwrap();
        assert_eq!(gui.node(child).unwrap().size.x, 0.0);
    }
}
