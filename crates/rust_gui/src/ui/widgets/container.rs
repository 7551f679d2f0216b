//! Plain container: holds children, optional auto-layout, transparent by default

use crate::foundation::math::{rgba, Vec2};
use crate::ui::container::ContainerState;
use crate::ui::node::Orientation;
use crate::ui::widget::{DrawCx, Widget, WidgetCx};

/// Container without padding
///
/// Children keep the positions they are given unless an orientation is set.
/// The background is only drawn when its alpha is above zero.
#[derive(Debug, Clone)]
pub struct Container {
    size: Vec2,
    orientation: Option<Orientation>,
}

impl Container {
    /// Create a container of the given size
    pub fn new(size: Vec2) -> Self {
        Self { size, orientation: None }
    }

    /// Stack children along an axis
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

impl Widget for Container {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let node = cx.node_mut();
        node.size = self.size;
        node.color = rgba(0.0, 0.0, 0.0, 0.0);
        node.hover_color = node.color;
        node.pressed_color = node.color;
        node.container = Some(ContainerState {
            orientation: self.orientation,
            ..ContainerState::new()
        });
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let color = cx.node().color;
        if color.w > 0.0 {
            cx.fill(color);
        }
    }
}
