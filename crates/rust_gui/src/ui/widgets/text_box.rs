//! Editable single-line text box
//!
//! Keeps its own `input` buffer next to a placeholder shown while the buffer
//! is empty. Content is re-validated on every edit; Enter commits valid
//! content to the consumer and always ends editing.

use super::label::Label;
use super::panel::DEFAULT_PADDING;
use crate::foundation::math::{Color, Vec2};
use crate::input::KeyCode;
use crate::ui::container::ContainerState;
use crate::ui::node::{Insets, NodeId};
use crate::ui::widget::{Consumer, DrawCx, Runnable, Supplier, Validator, Widget, WidgetCx};
use std::rc::Rc;

/// Text input field
pub struct TextBox {
    input: String,
    placeholder: String,
    padding: Insets,
    label: Option<NodeId>,
    valid: bool,
    invalid_color: Color,
    supplier: Option<Supplier<String>>,
    consumer: Option<Consumer<String>>,
    validator: Option<Validator>,
    on_edit_start: Option<Runnable>,
}

impl std::fmt::Debug for TextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("input", &self.input)
            .field("placeholder", &self.placeholder)
            .field("valid", &self.valid)
            .finish_non_exhaustive()
    }
}

impl TextBox {
    /// Create an empty text box showing `placeholder`
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            placeholder: placeholder.into(),
            padding: DEFAULT_PADDING,
            label: None,
            valid: true,
            invalid_color: Color::zeros(),
            supplier: None,
            consumer: None,
            validator: None,
            on_edit_start: None,
        }
    }

    /// Inner spacing
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Overwrite the buffer from `supplier` on every draw while not editing
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Fn() -> String + 'static) -> Self {
        self.supplier = Some(Box::new(supplier));
        self
    }

    /// Receive the text when valid content is committed with Enter
    #[must_use]
    pub fn with_consumer(mut self, consumer: impl Fn(String) + 'static) -> Self {
        self.consumer = Some(Rc::new(consumer));
        self
    }

    /// Decide which content is valid
    #[must_use]
    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Notified whenever the box gains focus
    #[must_use]
    pub fn on_edit_start(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_edit_start = Some(Rc::new(callback));
        self
    }

    /// Buffer content, or the placeholder when the buffer is empty
    pub fn text(&self) -> &str {
        if self.input.is_empty() {
            &self.placeholder
        } else {
            &self.input
        }
    }

    /// Raw buffer content
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the buffer
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Placeholder text
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Result of the last validation
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Force the validity flag
    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Background used while the content is invalid
    pub fn set_invalid_color(&mut self, color: Color) {
        self.invalid_color = color;
    }

    /// Set or clear the supplier
    pub fn set_supplier(&mut self, supplier: Option<Supplier<String>>) {
        self.supplier = supplier;
    }

    /// Set or clear the consumer
    pub fn set_consumer(&mut self, consumer: Option<Consumer<String>>) {
        self.consumer = consumer;
    }

    /// Set or clear the validator
    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
    }

    /// Set or clear the focus notification
    pub fn set_on_edit_start(&mut self, callback: Option<Runnable>) {
        self.on_edit_start = callback;
    }

    /// Re-run the validator on the current text
    pub fn validate(&mut self) -> bool {
        self.valid = self.validator.as_ref().map_or(true, |validator| validator(self.text()));
        self.valid
    }

    /// Text the label currently shows
    fn displayed_text(&self, cx: &WidgetCx<'_>) -> String {
        self.label
            .and_then(|label| cx.gui_ref().widget::<Label>(label))
            .map_or_else(|| self.text().to_string(), |label| label.text().to_string())
    }
}

impl Widget for TextBox {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let config = cx.config();
        let palette = config.palette.clone();
        let size = Vec2::new(200.0, 32.0);
        self.invalid_color = palette.invalid;

        let node = cx.node_mut();
        node.size = size;
        node.color = palette.panel;
        node.hover_color = palette.text_box_hover;
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
            log::warn!("Text box {:?} could not take its label: {}", id, err);
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
        let color = if !self.valid {
            self.invalid_color
        } else if node.focused {
            node.focused_color
        } else if node.hover {
            node.hover_color
        } else {
            node.color
        };
        let focused = node.focused;
        cx.fill(color);

        if !focused {
            if let Some(supplier) = &self.supplier {
                self.input = supplier();
            }
        }

        let Some(label) = self.label else { return };
        let palette = &cx.config().palette;
        let (text, color) = if self.input.is_empty() {
            (self.placeholder.clone(), palette.placeholder)
        } else {
            (self.input.clone(), palette.text)
        };
        let gui = cx.gui();
        if let Some(node) = gui.node_mut(label) {
            node.color = color;
        }
        if let Some(label) = gui.widget_mut::<Label>(label) {
            label.set_text(text);
        }
    }

    fn typed(&mut self, _cx: &mut WidgetCx<'_>, ch: char) {
        self.input.push(ch);
        self.validate();
    }

    fn key_pressed(&mut self, cx: &mut WidgetCx<'_>, key: KeyCode) {
        match key {
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.validate();
                }
            }
            KeyCode::Enter => {
                if self.validate() {
                    if let Some(consumer) = &self.consumer {
                        consumer(self.displayed_text(cx));
                    }
                }
                cx.defocus();
            }
            KeyCode::V if cx.input().ctrl_held() => {
                if let Some(text) = cx.gui_ref().clipboard_text() {
                    self.input.push_str(&text);
                    self.validate();
                }
            }
            _ => {}
        }
    }

    fn focus(&mut self, _cx: &mut WidgetCx<'_>) {
        if let Some(callback) = &self.on_edit_start {
            callback();
        }
    }

    fn is_focus_keeper(&self) -> bool {
        true
    }

    fn hit_children(&self) -> bool {
        false
    }
}
