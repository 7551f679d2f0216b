//! Page switcher
//!
//! Shows one named page at a time and remembers the pages it came from. The
//! control owns every registered page, shown or not, and takes the size of
//! the page on display.

use crate::foundation::math::{rgba, Vec2};
use crate::ui::container::ContainerState;
use crate::ui::error::GuiError;
use crate::ui::gui::Gui;
use crate::ui::node::NodeId;
use crate::ui::widget::{DrawCx, Widget, WidgetCx};
use std::collections::HashMap;

/// Container showing one page at a time
#[derive(Debug, Default)]
pub struct PagesControl {
    pages: HashMap<String, NodeId>,
    current: Option<String>,
    history: Vec<String>,
}

impl PagesControl {
    /// Create an empty page control
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page, replacing any page with the same name
    pub fn add_page(&mut self, cx: &mut WidgetCx<'_>, name: impl Into<String>, page: NodeId) -> Result<(), GuiError> {
        if !cx.gui_ref().contains(page) {
            return Err(GuiError::UnknownNode(page));
        }
        let name = name.into();
        cx.gui().retain(page);
        log::debug!("Added page '{}'", name);
        if let Some(previous) = self.pages.insert(name.clone(), page) {
            if self.current.as_deref() == Some(name.as_str()) {
                Self::hide(cx, previous);
                self.current = None;
            }
            cx.gui().release_ref(previous);
        }
        Ok(())
    }

    /// Whether a page is registered under `name`
    pub fn has_page(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Name of the page on display
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Node of the page on display
    pub fn current_page(&self) -> Option<NodeId> {
        self.current.as_ref().and_then(|name| self.pages.get(name)).copied()
    }

    /// Pages visited before the current one, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Show a page; with `history` the current page is remembered for [`back`](Self::back)
    pub fn set_page(&mut self, cx: &mut WidgetCx<'_>, name: &str, history: bool) -> Result<(), GuiError> {
        let page = *self
            .pages
            .get(name)
            .ok_or_else(|| GuiError::UnknownPage(name.to_string()))?;
        let id = cx.id();
        Self::check_attachable(cx.gui_ref(), id, page)?;

        if let Some(current) = self.current_page() {
            Self::hide(cx, current);
        }
        if let Some(previous) = self.current.take() {
            if history {
                self.history.push(previous);
            }
        }

        cx.gui().add_to(id, page)?;
        self.current = Some(name.to_string());
        log::debug!("Switched to page '{}'", name);
        self.fit(cx);
        Ok(())
    }

    /// Return to the previous page; does nothing without history
    pub fn back(&mut self, cx: &mut WidgetCx<'_>) -> Result<(), GuiError> {
        let Some(name) = self.history.pop() else { return Ok(()) };
        let result = self.set_page(cx, &name, false);
        if result.is_err() {
            self.history.push(name);
        }
        result
    }

    /// Forget the history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Hide the current page and forget the history
    pub fn reset(&mut self, cx: &mut WidgetCx<'_>) {
        self.history.clear();
        if let Some(current) = self.current_page() {
            Self::hide(cx, current);
        }
        self.current = None;
    }

    /// Fail before anything is hidden if `page` cannot be shown in `menu`
    fn check_attachable(gui: &Gui, menu: NodeId, page: NodeId) -> Result<(), GuiError> {
        let node = gui.node(page).ok_or(GuiError::UnknownNode(page))?;
        match node.parent {
            Some(parent) if parent != menu => Err(GuiError::AlreadyAttached { node: page, parent }),
            _ if gui.is_ancestor_or_self(page, menu) => Err(GuiError::WouldCreateCycle { node: page, parent: menu }),
            _ => Ok(()),
        }
    }

    fn hide(cx: &mut WidgetCx<'_>, page: NodeId) {
        let id = cx.id();
        if let Err(err) = cx.gui().remove_from(id, page) {
            log::warn!("Could not hide page {:?}: {}", page, err);
        }
    }

    /// Take the size of the page on display
    fn fit(&self, cx: &mut WidgetCx<'_>) {
        let size = self
            .current_page()
            .and_then(|page| cx.gui_ref().node(page))
            .map(|node| node.size);
        if let Some(size) = size {
            cx.node_mut().size = size;
        }
    }
}

impl Widget for PagesControl {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let node = cx.node_mut();
        node.size = Vec2::new(1.0, 1.0);
        node.color = rgba(0.0, 0.0, 0.0, 0.0);
        node.hover_color = node.color;
        node.pressed_color = node.color;
        node.container = Some(ContainerState::new());
    }

    fn act(&mut self, cx: &mut WidgetCx<'_>, _delta: f32) {
        self.fit(cx);
    }

    fn draw(&mut self, _cx: &mut DrawCx<'_, '_>) {}

    fn dispose(&mut self, cx: &mut WidgetCx<'_>) {
        for (_, page) in self.pages.drain() {
            cx.gui().release_ref(page);
        }
    }
}
