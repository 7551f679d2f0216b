//! Buttons: a padded panel that fires actions on click
//!
//! A click is a press followed by a release inside the button's box;
//! releasing outside cancels it.

use super::label::Label;
use super::panel::DEFAULT_PADDING;
use crate::foundation::math::Vec2;
use crate::ui::container::ContainerState;
use crate::ui::gui::Gui;
use crate::ui::node::{Align, Insets, NodeId};
use crate::ui::widget::{Action, DrawCx, Widget, WidgetCx};
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Content {
    Text { text: String, size: Option<Vec2> },
    Node(NodeId),
}

/// Clickable button holding either a centered label or arbitrary content
pub struct Button {
    content: Content,
    padding: Insets,
    label: Option<NodeId>,
    actions: Vec<Action>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("content", &self.content)
            .field("padding", &self.padding)
            .field("label", &self.label)
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl Button {
    /// Text button; sized from the text unless [`with_size`](Self::with_size) is used
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text { text: text.into(), size: None },
            padding: DEFAULT_PADDING,
            label: None,
            actions: Vec::new(),
        }
    }

    /// Button wrapping an existing node, sized to it
    ///
    /// The content is made non-interactive so the button receives the clicks.
    pub fn with_content(content: NodeId) -> Self {
        Self {
            content: Content::Node(content),
            padding: DEFAULT_PADDING,
            label: None,
            actions: Vec::new(),
        }
    }

    /// Inner spacing
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Explicit size for a text button; a negative height keeps the text heuristic
    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        if let Content::Text { size: slot, .. } = &mut self.content {
            *slot = Some(size);
        }
        self
    }

    /// Add an action fired on click
    #[must_use]
    pub fn on_action(mut self, action: impl Fn(&mut Gui) + 'static) -> Self {
        self.actions.push(Rc::new(action));
        self
    }

    /// Add an action fired on click; actions fire in registration order
    pub fn listen_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Label node of a text button
    pub fn label(&self) -> Option<NodeId> {
        self.label
    }

    /// Text of the label (empty for content buttons)
    pub fn text(&self, gui: &Gui) -> String {
        self.label
            .and_then(|label| gui.widget::<Label>(label))
            .map(|label| label.text().to_string())
            .unwrap_or_default()
    }

    /// Replace the label text
    pub fn set_text(&self, gui: &mut Gui, text: impl Into<String>) {
        if let Some(label) = self.label.and_then(|label| gui.widget_mut::<Label>(label)) {
            label.set_text(text);
        }
    }

    /// Label alignment (left for content buttons)
    pub fn text_align(&self, gui: &Gui) -> Align {
        self.label
            .and_then(|label| gui.widget::<Label>(label))
            .map_or(Align::Left, Label::align)
    }

    /// Change the label alignment
    pub fn set_text_align(&self, gui: &mut Gui, align: Align) {
        if let Some(label) = self.label.and_then(|label| gui.widget_mut::<Label>(label)) {
            label.set_align(align);
        }
    }

    /// Pull the label text from `supplier` on every draw
    pub fn set_text_supplier(&self, gui: &mut Gui, supplier: impl Fn() -> String + 'static) {
        if let Some(label) = self.label.and_then(|label| gui.widget_mut::<Label>(label)) {
            label.set_supplier(Some(Box::new(supplier)));
        }
    }

    fn attach(cx: &mut WidgetCx<'_>, child: NodeId) {
        let id = cx.id();
        if let Err(err) = cx.gui().add_to(id, child) {
            log::warn!("Button {:?} could not take its content: {}", id, err);
        }
    }
}

/// Size a text button takes when no height is given
pub(crate) fn text_size(text: &str, padding: Insets, hint: Option<Vec2>, glyph_width: f32, line_height: f32) -> Vec2 {
    match hint {
        Some(size) if size.y >= 0.0 => size,
        _ => {
            let width = hint.map_or(0.0, |size| size.x);
            Vec2::new(
                (padding.horizontal() + text.chars().count() as f32 * glyph_width).max(width),
                padding.vertical() + line_height,
            )
        }
    }
}

impl Widget for Button {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let config = cx.config();
        let (glyph_width, line_height) = (config.glyph_width, config.line_height);
        let palette = config.palette.clone();

        let node = cx.node_mut();
        node.color = palette.panel;
        node.hover_color = palette.button_hover;
        node.pressed_color = palette.pressed;
        node.container = Some(ContainerState {
            scrollable: false,
            ..ContainerState::with_padding(self.padding)
        });

        match self.content.clone() {
            Content::Text { text, size } => {
                let size = text_size(&text, self.padding, size, glyph_width, line_height);
                cx.node_mut().size = size;

                let label = cx.gui().spawn(Label::new(text).with_align(Align::Center));
                if let Some(node) = cx.gui().node_mut(label) {
                    node.position = self.padding.origin();
                    node.size = (size - self.padding.size()).sup(&Vec2::zeros());
                }
                self.label = Some(label);
                Self::attach(cx, label);
            }
            Content::Node(content) => {
                let margin = cx.node().margin;
                let Some(node) = cx.gui().node_mut(content) else {
                    log::warn!("Button content {:?} does not exist", content);
                    return;
                };
                node.interactive = false;
                node.position = self.padding.origin();
                let size = node.size + self.padding.size() + margin.size();
                cx.node_mut().size = size;
                Self::attach(cx, content);
            }
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
        let color = cx.node().state_color();
        cx.fill(color);
    }

    fn mouse_release(&mut self, cx: &mut WidgetCx<'_>, x: f32, y: f32) {
        if cx.is_inside(x, y) {
            for action in &self.actions {
                cx.emit(action);
            }
        }
    }
}

/// Bare interactive container with button click semantics
///
/// Has no built-in content; add children to build composite click targets.
pub struct RichButton {
    size: Vec2,
    actions: Vec<Action>,
}

impl std::fmt::Debug for RichButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichButton")
            .field("size", &self.size)
            .field("actions", &self.actions.len())
            .finish()
    }
}

impl RichButton {
    /// Create an empty rich button
    pub fn new(size: Vec2) -> Self {
        Self { size, actions: Vec::new() }
    }

    /// Add an action fired on click
    #[must_use]
    pub fn on_action(mut self, action: impl Fn(&mut Gui) + 'static) -> Self {
        self.actions.push(Rc::new(action));
        self
    }

    /// Add an action fired on click
    pub fn listen_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

impl Widget for RichButton {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let palette = cx.config().palette.clone();
        let node = cx.node_mut();
        node.size = self.size;
        node.color = palette.panel;
        node.hover_color = palette.button_hover;
        node.pressed_color = palette.pressed;
        node.container = Some(ContainerState::new());
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        let color = cx.node().state_color();
        cx.fill(color);
    }

    fn mouse_release(&mut self, cx: &mut WidgetCx<'_>, x: f32, y: f32) {
        if cx.is_inside(x, y) {
            for action in &self.actions {
                cx.emit(action);
            }
        }
    }
}
