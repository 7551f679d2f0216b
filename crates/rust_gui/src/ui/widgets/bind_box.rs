//! Key binding capture box

use super::label::Label;
use super::panel::DEFAULT_PADDING;
use crate::foundation::math::Vec2;
use crate::input::{Binding, KeyCode, MouseButton, SharedBinding};
use crate::ui::container::ContainerState;
use crate::ui::node::{Insets, NodeId};
use crate::ui::widget::{DrawCx, Widget, WidgetCx};

/// Shows a binding and, while focused, rebinds it to the next key or mouse button
///
/// Escape cancels the capture; either way focus is released.
#[derive(Debug)]
pub struct InputBindBox {
    binding: SharedBinding,
    padding: Insets,
    label: Option<NodeId>,
}

impl InputBindBox {
    /// Create a box editing `binding`
    pub fn new(binding: SharedBinding) -> Self {
        Self {
            binding,
            padding: DEFAULT_PADDING,
            label: None,
        }
    }

    /// Inner spacing
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Current binding value
    pub fn binding(&self) -> Binding {
        *self.binding.borrow()
    }
}

impl Widget for InputBindBox {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let palette = cx.config().palette.clone();
        let size = Vec2::new(100.0, 32.0);

        let node = cx.node_mut();
        node.size = size;
        node.color = palette.panel;
        node.hover_color = palette.button_hover;
        node.pressed_color = palette.panel;
        node.focused_color = palette.focused;
        node.container = Some(ContainerState {
            scrollable: false,
            ..ContainerState::with_padding(self.padding)
        });

        let label = cx.gui().spawn(Label::new(""));
        if let Some(node) = cx.gui().node_mut(label) {
            node.position = self.padding.origin();
            node.size = (size - self.padding.size()).sup(&Vec2::zeros());
        }
        self.label = Some(label);
        let id = cx.id();
        if let Err(err) = cx.gui().add_to(id, label) {
            log::warn!("Bind box {:?} could not take its label: {}", id, err);
        }
    }

    fn refresh(&mut self, cx: &mut WidgetCx<'_>) {
        let Some(label) = self.label else { return };
        let size = cx.node().size;
        let padding = self.padding;
        if let Some(node) = cx.gui().node_mut(label) {
            node.position = padding.origin();
            node.size = (size - padding.size()).sup(&Vec2::zeros());
        }
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let node = cx.node();
        let color = if node.focused {
            node.focused_color
        } else if node.hover {
            node.hover_color
        } else {
            node.color
        };
        cx.fill(color);

        let text = self.binding.borrow().text();
        if let Some(label) = self.label.and_then(|label| cx.gui().widget_mut::<Label>(label)) {
            label.set_text(text);
        }
    }

    fn clicked(&mut self, cx: &mut WidgetCx<'_>, button: MouseButton) {
        log::debug!("Rebound to {}", button.name());
        *self.binding.borrow_mut() = Binding::mouse(button);
        cx.defocus();
    }

    fn key_pressed(&mut self, cx: &mut WidgetCx<'_>, key: KeyCode) {
        if key != KeyCode::Escape {
            log::debug!("Rebound to {}", key.name());
            *self.binding.borrow_mut() = Binding::key(key);
        }
        cx.defocus();
    }

    fn is_focus_keeper(&self) -> bool {
        true
    }
}
