//! Widget hook set and the contexts hooks run with
//!
//! A widget is the behavior half of a node; its base state (`Node`) lives in
//! the arena next to it. While a hook runs the widget is taken out of its
//! slot, so the hook can borrow the whole [`Gui`] through its context.
//! Callbacks that need the GUI are queued with [`WidgetCx::emit`] and run
//! once the outermost hook has returned.

use super::gui::Gui;
use super::node::{Node, NodeId};
use crate::config::GuiConfig;
use crate::foundation::math::{Color, Rect, Vec2};
use crate::input::{InputState, KeyCode, MouseButton};
use crate::rendering::{Assets, Font, Surface};
use std::any::Any;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Callback run with the controller, e.g. a button action
pub type Action = Rc<dyn Fn(&mut Gui)>;

/// Pulls external state into a widget every draw
pub type Supplier<T> = Box<dyn Fn() -> T>;

/// Pushes committed widget state out
pub type Consumer<T> = Rc<dyn Fn(T)>;

/// Text predicate deciding whether a text box content is valid
pub type Validator = Box<dyn Fn(&str) -> bool>;

/// Plain notification
pub type Runnable = Rc<dyn Fn()>;

/// Downcasting support, implemented for every widget type
pub trait AsAny {
    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;
    /// Mutably borrow as `Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior attached to a node
///
/// Every hook except `draw` defaults to doing nothing. The controller updates
/// the base flags (hover, pressed, focused) before calling a hook.
#[allow(unused_variables)]
pub trait Widget: AsAny {
    /// Called once after the node is created: set up geometry, colors and children
    fn init(&mut self, cx: &mut WidgetCx<'_>) {}

    /// Per-frame update for visible nodes
    fn act(&mut self, cx: &mut WidgetCx<'_>, delta: f32) {}

    /// Draw the node itself; children are drawn by the controller afterwards
    fn draw(&mut self, cx: &mut DrawCx<'_, '_>);

    /// Recompute size-dependent child geometry after a resize
    fn refresh(&mut self, cx: &mut WidgetCx<'_>) {}

    /// Left button went down over the node
    fn click(&mut self, cx: &mut WidgetCx<'_>, x: f32, y: f32) {}

    /// A mouse button went down while the node is focused
    fn clicked(&mut self, cx: &mut WidgetCx<'_>, button: MouseButton) {}

    /// Cursor moved with the left button held while the node is focused
    fn mouse_move(&mut self, cx: &mut WidgetCx<'_>, x: f32, y: f32) {}

    /// Left button released after a press that started on the node
    fn mouse_release(&mut self, cx: &mut WidgetCx<'_>, x: f32, y: f32) {}

    /// Wheel moved over the node; return `true` to stop default scrolling
    fn scrolled(&mut self, cx: &mut WidgetCx<'_>, value: i32) -> bool {
        false
    }

    /// Character typed while focused
    fn typed(&mut self, cx: &mut WidgetCx<'_>, ch: char) {}

    /// Key pressed (or repeated) while focused
    fn key_pressed(&mut self, cx: &mut WidgetCx<'_>, key: KeyCode) {}

    /// Node gained focus
    fn focus(&mut self, cx: &mut WidgetCx<'_>) {}

    /// Node lost focus
    fn defocus(&mut self, cx: &mut WidgetCx<'_>) {}

    /// Node is about to be destroyed; release anything it owns
    fn dispose(&mut self, cx: &mut WidgetCx<'_>) {}

    /// Whether focus on this widget captures all keyboard input
    fn is_focus_keeper(&self) -> bool {
        false
    }

    /// Whether hit-testing descends into children
    fn hit_children(&self) -> bool {
        true
    }
}

/// Context a hook runs with: the controller plus the node being served
pub struct WidgetCx<'a> {
    gui: &'a mut Gui,
    id: NodeId,
}

impl<'a> WidgetCx<'a> {
    pub(crate) fn new(gui: &'a mut Gui, id: NodeId) -> Self {
        Self { gui, id }
    }

    /// Node being served
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Base state of the node
    ///
    /// Nodes are never removed from the arena while one of their hooks runs,
    /// so the lookup cannot miss.
    pub fn node(&self) -> &Node {
        &self.gui.nodes[self.id].node
    }

    /// Mutable base state of the node
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.gui.nodes[self.id].node
    }

    /// The controller
    pub fn gui(&mut self) -> &mut Gui {
        self.gui
    }

    /// Shared view of the controller
    pub fn gui_ref(&self) -> &Gui {
        self.gui
    }

    /// Toolkit configuration
    pub fn config(&self) -> &GuiConfig {
        self.gui.config()
    }

    /// Input gathered this frame
    pub fn input(&self) -> &InputState {
        self.gui.input()
    }

    /// Absolute screen position of the node
    pub fn coord(&self) -> Vec2 {
        self.gui.calc_coord(self.id)
    }

    /// Absolute screen box of the node
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.coord(), self.node().size)
    }

    /// Whether a screen point lies inside the node
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        self.gui.is_inside(self.id, Vec2::new(x, y))
    }

    /// Release focus if this node holds it
    pub fn defocus(&mut self) {
        let id = self.id;
        self.gui.defocus(id);
    }

    /// Queue an action to run once the current hook has returned
    pub fn emit(&mut self, action: &Action) {
        self.gui.queue_action(Rc::clone(action));
    }
}

/// Draw context: a [`WidgetCx`] plus the surface and asset lookup
pub struct DrawCx<'a, 'b> {
    cx: WidgetCx<'a>,
    /// Surface to draw on
    pub surface: &'b mut dyn Surface,
    /// Texture and font lookup
    pub assets: &'b dyn Assets,
}

impl<'a, 'b> DrawCx<'a, 'b> {
    pub(crate) fn new(cx: WidgetCx<'a>, surface: &'b mut dyn Surface, assets: &'b dyn Assets) -> Self {
        Self { cx, surface, assets }
    }

    /// Fill an area with a flat color; negative extents clamp to zero
    pub fn fill_rect(&mut self, area: Rect, color: Color) {
        let area = area.clamped();
        self.surface.set_texture(None);
        self.surface.set_color(color);
        self.surface.rect(area.x, area.y, area.width, area.height);
    }

    /// Fill the node's own box
    pub fn fill(&mut self, color: Color) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    /// Resolve a font by name, logging misses
    pub fn font(&self, name: &str) -> Option<&'b dyn Font> {
        let assets = self.assets;
        let font = assets.font(name);
        if font.is_none() {
            log::trace!("Font '{}' not found, skipping text", name);
        }
        font
    }
}

impl<'a> Deref for DrawCx<'a, '_> {
    type Target = WidgetCx<'a>;

    fn deref(&self) -> &Self::Target {
        &self.cx
    }
}

impl DerefMut for DrawCx<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cx
    }
}
