//! Check boxes
//!
//! Unlike buttons, a check box toggles on any release of a press that started
//! on it, wherever the cursor ends up.

use super::label::Label;
use crate::foundation::math::{rgba, Color, Vec2};
use crate::ui::container::ContainerState;
use crate::ui::gui::Gui;
use crate::ui::node::{Insets, NodeId, Orientation};
use crate::ui::widget::{Consumer, DrawCx, Supplier, Widget, WidgetCx};
use std::rc::Rc;

/// Boolean toggle
pub struct CheckBox {
    checked: bool,
    check_color: Option<Color>,
    supplier: Option<Supplier<bool>>,
    consumer: Option<Consumer<bool>>,
}

impl std::fmt::Debug for CheckBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckBox")
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}

impl CheckBox {
    /// Create a check box
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            check_color: None,
            supplier: None,
            consumer: None,
        }
    }

    /// Pull the state from `supplier` on every draw
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Fn() -> bool + 'static) -> Self {
        self.supplier = Some(Box::new(supplier));
        self
    }

    /// Receive the new state after every toggle
    #[must_use]
    pub fn with_consumer(mut self, consumer: impl Fn(bool) + 'static) -> Self {
        self.consumer = Some(Rc::new(consumer));
        self
    }

    /// Current state
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state without notifying the consumer
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Fill color while checked
    pub fn set_check_color(&mut self, color: Color) {
        self.check_color = Some(color);
    }

    /// Set or clear the supplier
    pub fn set_supplier(&mut self, supplier: Option<Supplier<bool>>) {
        self.supplier = supplier;
    }

    /// Set or clear the consumer
    pub fn set_consumer(&mut self, consumer: Option<Consumer<bool>>) {
        self.consumer = consumer;
    }
}

impl Widget for CheckBox {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let palette = cx.config().palette.clone();
        if self.check_color.is_none() {
            self.check_color = Some(palette.check);
        }
        let node = cx.node_mut();
        node.size = Vec2::new(32.0, 32.0);
        node.color = palette.check_background;
        node.hover_color = palette.button_hover;
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        if let Some(supplier) = &self.supplier {
            self.checked = supplier();
        }
        let node = cx.node();
        let color = match (self.checked, self.check_color) {
            (true, Some(check)) => check,
            _ if node.hover => node.hover_color,
            _ => node.color,
        };
        cx.fill(color);
    }

    fn mouse_release(&mut self, cx: &mut WidgetCx<'_>, _x: f32, _y: f32) {
        self.checked = !self.checked;
        log::trace!("Check box {:?} -> {}", cx.id(), self.checked);
        if let Some(consumer) = &self.consumer {
            consumer(self.checked);
        }
    }
}

/// Check box with a text label, laid out horizontally
pub struct FullCheckBox {
    text: String,
    size: Vec2,
    checkbox: Option<CheckBox>,
    checkbox_id: Option<NodeId>,
}

impl std::fmt::Debug for FullCheckBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullCheckBox")
            .field("text", &self.text)
            .field("size", &self.size)
            .field("checkbox", &self.checkbox_id)
            .finish()
    }
}

impl FullCheckBox {
    /// Create a labelled check box
    pub fn new(text: impl Into<String>, size: Vec2, checked: bool) -> Self {
        Self {
            text: text.into(),
            size,
            checkbox: Some(CheckBox::new(checked)),
            checkbox_id: None,
        }
    }

    /// Pull the state from `supplier` on every draw
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Fn() -> bool + 'static) -> Self {
        self.checkbox = self.checkbox.map(|checkbox| checkbox.with_supplier(supplier));
        self
    }

    /// Receive the new state after every toggle
    #[must_use]
    pub fn with_consumer(mut self, consumer: impl Fn(bool) + 'static) -> Self {
        self.checkbox = self.checkbox.map(|checkbox| checkbox.with_consumer(consumer));
        self
    }

    /// Inner check box node
    pub fn checkbox(&self) -> Option<NodeId> {
        self.checkbox_id
    }

    /// State of the inner check box
    pub fn is_checked(&self, gui: &Gui) -> bool {
        self.checkbox_id
            .and_then(|id| gui.widget::<CheckBox>(id))
            .is_some_and(CheckBox::is_checked)
    }

    /// Set the state of the inner check box
    pub fn set_checked(&self, gui: &mut Gui, checked: bool) {
        if let Some(checkbox) = self.checkbox_id.and_then(|id| gui.widget_mut::<CheckBox>(id)) {
            checkbox.set_checked(checked);
        }
    }
}

impl Widget for FullCheckBox {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let node = cx.node_mut();
        node.size = self.size;
        node.color = rgba(0.0, 0.0, 0.0, 0.0);
        node.hover_color = node.color;
        node.pressed_color = node.color;
        node.container = Some(ContainerState {
            orientation: Some(Orientation::Horizontal),
            padding: super::panel::DEFAULT_PADDING,
            fit_content: true,
            ..ContainerState::new()
        });

        let id = cx.id();
        let gui = cx.gui();
        if let Some(checkbox) = self.checkbox.take() {
            let checkbox = gui.spawn(checkbox);
            self.checkbox_id = Some(checkbox);
            if let Err(err) = gui.add_to(id, checkbox) {
                log::warn!("Check box {:?} could not take its box: {}", id, err);
            }
        }

        let label = gui.spawn(Label::new(self.text.clone()));
        if let Some(node) = gui.node_mut(label) {
            node.margin = Insets::new(5.0, 5.0, 0.0, 0.0);
        }
        if let Err(err) = gui.add_to(id, label) {
            log::warn!("Check box {:?} could not take its label: {}", id, err);
        }
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let color = cx.node().state_color();
        if color.w > 0.0 {
            cx.fill(color);
        }
    }
}
