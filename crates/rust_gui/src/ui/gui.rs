//! GUI controller
//!
//! Owns the node arena, the root container and the menu, tracks the hovered,
//! pressed and focused nodes, keeps the name registry and drives per-frame
//! input dispatch and drawing.
//!
//! # Ownership
//!
//! A node is owned by its parent container, by every registry name it is
//! stored under and by page lists. A freshly spawned node is floating: the
//! first owner takes it over. When the last owner lets go the node is
//! destroyed along with every child nobody else owns. `NodeId`s held by the
//! application do not keep nodes alive.

use super::container::{ContainerState, IntervalEvent};
use super::error::GuiError;
use super::node::{Node, NodeId};
use super::widget::{Action, DrawCx, Widget, WidgetCx};
use super::widgets::{Container, PagesControl};
use crate::config::GuiConfig;
use crate::foundation::math::{Rect, Vec2};
use crate::input::{Clipboard, InputState, KeyCode, Modifiers, MouseButton};
use crate::rendering::{Assets, Surface};
use slotmap::SlotMap;
use std::collections::{HashMap, VecDeque};

/// Arena slot: base state plus the widget (absent while one of its hooks runs)
pub(crate) struct Slot {
    pub(crate) node: Node,
    pub(crate) widget: Option<Box<dyn Widget>>,
}

type Deferred = Box<dyn FnOnce(&mut Gui)>;

/// The main UI controller
pub struct Gui {
    pub(crate) nodes: SlotMap<NodeId, Slot>,
    root: NodeId,
    menu: NodeId,

    hover: Option<NodeId>,
    pressed: Option<NodeId>,
    focus: Option<NodeId>,
    storage: HashMap<String, NodeId>,

    input: InputState,
    clipboard: Option<Box<dyn Clipboard>>,
    viewport: Vec2,
    config: GuiConfig,

    /// Hooks currently running
    depth: usize,
    flushing: bool,
    deferred: VecDeque<Deferred>,
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("nodes", &self.nodes.len())
            .field("hover", &self.hover)
            .field("pressed", &self.pressed)
            .field("focus", &self.focus)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Gui {
    /// Create a controller with an empty root container and a menu
    pub fn new(config: GuiConfig) -> Self {
        let (width, height) = config.viewport;
        let mut gui = Self {
            nodes: SlotMap::with_key(),
            root: NodeId::default(),
            menu: NodeId::default(),
            hover: None,
            pressed: None,
            focus: None,
            storage: HashMap::new(),
            input: InputState::new(),
            clipboard: None,
            viewport: Vec2::new(width, height),
            config,
            depth: 0,
            flushing: false,
            deferred: VecDeque::new(),
        };

        let root = gui.spawn(Container::new(Vec2::new(width, height)));
        if let Some(node) = gui.node_mut(root) {
            node.floating = false;
            node.owners = 1;
            if let Some(container) = node.container_mut() {
                container.scrollable = false;
            }
        }
        gui.root = root;

        let menu = gui.spawn(PagesControl::new());
        gui.menu = menu;
        if let Err(err) = gui.add_to(root, menu) {
            log::error!("Failed to attach menu: {}", err);
        }

        log::debug!("Gui created with viewport {}x{}", width, height);
        gui
    }

    // ------------------------------------------------------------------
    // Node creation and access

    /// Create a node for `widget` and run its `init` hook
    ///
    /// The node starts detached and floating; attach or store it, or hand it
    /// back with [`release`](Self::release).
    pub fn spawn(&mut self, widget: impl Widget + 'static) -> NodeId {
        let id = self.nodes.insert(Slot {
            node: Node::default(),
            widget: Some(Box::new(widget)),
        });
        log::trace!("Spawned node {:?}", id);
        self.dispatch_hook(id, |widget, cx| widget.init(cx));
        id
    }

    /// Destroy a node that was spawned and never attached or stored
    pub fn release(&mut self, id: NodeId) -> Result<(), GuiError> {
        let node = self.node(id).ok_or(GuiError::UnknownNode(id))?;
        if !node.floating {
            log::warn!("Refusing to release owned node {:?}", id);
            return Ok(());
        }
        self.destroy(id);
        Ok(())
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Base state of a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).map(|slot| &slot.node)
    }

    /// Mutable base state of a node
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).map(|slot| &mut slot.node)
    }

    /// Typed view of a node's widget
    pub fn widget<W: Widget + 'static>(&self, id: NodeId) -> Option<&W> {
        let widget: &dyn Widget = self.nodes.get(id)?.widget.as_deref()?;
        widget.as_any().downcast_ref()
    }

    /// Mutable typed view of a node's widget
    ///
    /// Changes that need the controller (children, layout) go through
    /// [`with_widget`](Self::with_widget) instead.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: NodeId) -> Option<&mut W> {
        let widget: &mut dyn Widget = self.nodes.get_mut(id)?.widget.as_deref_mut()?;
        widget.as_any_mut().downcast_mut()
    }

    /// Run `f` with a node's widget and a context for that node
    pub fn with_widget<W: Widget + 'static, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut W, &mut WidgetCx<'_>) -> R,
    ) -> Result<R, GuiError> {
        if !self.contains(id) {
            return Err(GuiError::UnknownNode(id));
        }
        let result = self.dispatch(id, |widget, cx| {
            widget.as_any_mut().downcast_mut::<W>().map(|widget| f(widget, cx))
        });
        match result {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(GuiError::WrongWidget(id, std::any::type_name::<W>())),
            None => Err(GuiError::Busy(id)),
        }
    }

    /// Root container
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Main menu (a [`PagesControl`] centered on the viewport)
    pub fn menu(&self) -> NodeId {
        self.menu
    }

    /// Toolkit configuration
    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Input gathered this frame
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Viewport size
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Children of a container (empty for leaves and unknown nodes)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .and_then(Node::container)
            .map(ContainerState::children)
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Geometry

    /// Absolute screen position: own position plus every ancestor's position and scroll
    pub fn calc_coord(&self, id: NodeId) -> Vec2 {
        let mut coord = Vec2::zeros();
        let mut current = self.node(id);
        while let Some(node) = current {
            coord += node.position;
            current = node.parent.and_then(|parent| self.node(parent));
            if let Some(parent) = current {
                coord += parent.content_offset();
            }
        }
        coord
    }

    /// Whether a screen point lies within `[coord, coord + size)`
    pub fn is_inside(&self, id: NodeId, point: Vec2) -> bool {
        self.node(id)
            .is_some_and(|node| Rect::from_pos_size(self.calc_coord(id), node.size).contains(point))
    }

    /// Deepest visible interactive node under `point`, searching from `id`
    ///
    /// Children are searched back to front, so among overlapping siblings the
    /// last added wins. A non-interactive node hides its whole subtree.
    pub fn get_at(&self, id: NodeId, point: Vec2) -> Option<NodeId> {
        let slot = self.nodes.get(id)?;
        if !slot.node.interactive || !self.is_inside(id, point) {
            return None;
        }
        let hit_children = slot.widget.as_ref().map_or(true, |widget| widget.hit_children());
        if hit_children {
            for &child in self.children(id).iter().rev() {
                if !self.node(child).is_some_and(|node| node.visible) {
                    continue;
                }
                if let Some(hit) = self.get_at(child, point) {
                    return Some(hit);
                }
            }
        }
        Some(id)
    }

    /// Resize a node, then let it and its ancestors restack
    pub fn set_size(&mut self, id: NodeId, size: Vec2) {
        let Some(node) = self.node_mut(id) else { return };
        let old = node.size;
        node.size = size;
        let parent = node.parent;
        self.refresh(id);
        let resized = self.node(id).is_some_and(|node| node.size != old);
        if let (true, Some(parent)) = (resized, parent) {
            self.refresh_upward(parent);
        }
    }

    /// Set a node's local position
    pub fn set_position(&mut self, id: NodeId, position: Vec2) {
        if let Some(node) = self.node_mut(id) {
            node.position = position;
        }
    }

    /// Rerun the widget's `refresh` hook and the container layout
    pub fn refresh(&mut self, id: NodeId) {
        self.dispatch_hook(id, |widget, cx| widget.refresh(cx));
        self.layout(id);
    }

    /// Refresh `id`, then each ancestor for as long as sizes keep changing
    fn refresh_upward(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(before) = self.node(id).map(|node| node.size) else { return };
            self.refresh(id);
            let Some(node) = self.node(id) else { return };
            if node.size == before {
                return;
            }
            current = node.parent;
        }
    }

    // ------------------------------------------------------------------
    // Tree structure

    /// Append a node to the root container
    pub fn add(&mut self, node: NodeId) -> Result<(), GuiError> {
        self.add_to(self.root, node)
    }

    /// Remove a node from the root container
    pub fn remove(&mut self, node: NodeId) -> Result<(), GuiError> {
        self.remove_from(self.root, node)
    }

    /// Append `node` to `parent`
    pub fn add_to(&mut self, parent: NodeId, node: NodeId) -> Result<(), GuiError> {
        self.attach(parent, node, None)
    }

    /// Insert `node` in front of `parent`'s children (drawn first, hit last)
    pub fn add_back(&mut self, parent: NodeId, node: NodeId) -> Result<(), GuiError> {
        self.attach(parent, node, Some(0))
    }

    /// Place `node` at `position`, then append it to `parent`
    pub fn add_at(&mut self, parent: NodeId, node: NodeId, position: Vec2) -> Result<(), GuiError> {
        self.node_mut(node).ok_or(GuiError::UnknownNode(node))?.position = position;
        self.attach(parent, node, None)
    }

    fn attach(&mut self, parent: NodeId, node: NodeId, index: Option<usize>) -> Result<(), GuiError> {
        let child = self.node(node).ok_or(GuiError::UnknownNode(node))?;
        if let Some(current) = child.parent {
            return Err(GuiError::AlreadyAttached { node, parent: current });
        }
        let target = self.node(parent).ok_or(GuiError::UnknownNode(parent))?;
        if !target.is_container() {
            return Err(GuiError::NotAContainer(parent));
        }
        if self.is_ancestor_or_self(node, parent) {
            return Err(GuiError::WouldCreateCycle { node, parent });
        }

        if let Some(container) = self.node_mut(parent).and_then(Node::container_mut) {
            match index {
                Some(index) => container.children.insert(index.min(container.children.len()), node),
                None => container.children.push(node),
            }
        }
        if let Some(child) = self.node_mut(node) {
            child.parent = Some(parent);
        }
        self.retain(node);
        log::debug!("Attached {:?} to {:?}", node, parent);
        self.refresh_upward(parent);
        Ok(())
    }

    /// Remove `node` from `parent`; it is destroyed unless something else owns it
    pub fn remove_from(&mut self, parent: NodeId, node: NodeId) -> Result<(), GuiError> {
        self.detach(parent, node)?;
        self.refresh_upward(parent);
        self.release_ref(node);
        Ok(())
    }

    /// Remove every child of a container
    pub fn clear(&mut self, parent: NodeId) -> Result<(), GuiError> {
        let target = self.node(parent).ok_or(GuiError::UnknownNode(parent))?;
        let children = target
            .container()
            .ok_or(GuiError::NotAContainer(parent))?
            .children
            .clone();
        for child in &children {
            self.detach(parent, *child)?;
        }
        self.refresh_upward(parent);
        for child in children {
            self.release_ref(child);
        }
        Ok(())
    }

    fn detach(&mut self, parent: NodeId, node: NodeId) -> Result<(), GuiError> {
        let container = self
            .node_mut(parent)
            .ok_or(GuiError::UnknownNode(parent))?
            .container_mut()
            .ok_or(GuiError::NotAContainer(parent))?;
        let index = container
            .children
            .iter()
            .position(|&child| child == node)
            .ok_or(GuiError::NotAChild { node, parent })?;
        container.children.remove(index);
        if let Some(child) = self.node_mut(node) {
            child.parent = None;
        }
        self.forget_subtree(node);
        log::debug!("Detached {:?} from {:?}", node, parent);
        Ok(())
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub(crate) fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|node| node.parent);
        }
        false
    }

    /// Take an owning reference
    pub(crate) fn retain(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.owners += 1;
            node.floating = false;
        }
    }

    /// Drop an owning reference, destroying the node when it was the last one
    pub(crate) fn release_ref(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else { return };
        node.owners = node.owners.saturating_sub(1);
        if node.owners == 0 && !node.floating {
            self.destroy(id);
        }
    }

    /// Destroy a node and every child nobody else owns
    fn destroy(&mut self, id: NodeId) {
        if self.depth > 0 {
            self.deferred.push_back(Box::new(move |gui: &mut Gui| {
                if gui.node(id).is_some_and(|node| node.owners == 0 && node.parent.is_none()) {
                    gui.destroy(id);
                }
            }));
            return;
        }
        self.depth += 1;
        self.forget_subtree(id);
        self.dispatch_hook(id, |widget, cx| widget.dispose(cx));
        if let Some(slot) = self.nodes.remove(id) {
            log::debug!("Destroyed node {:?}", id);
            if let Some(container) = slot.node.container {
                for child in container.children {
                    if let Some(node) = self.node_mut(child) {
                        node.parent = None;
                    }
                    self.release_ref(child);
                }
            }
        }
        self.end_hook();
    }

    /// Clear hover, pressed and focus pointing into the subtree at `id`
    fn forget_subtree(&mut self, id: NodeId) {
        if self.hover.is_some_and(|hover| self.is_ancestor_or_self(id, hover)) {
            if let Some(hover) = self.hover.take() {
                if let Some(node) = self.node_mut(hover) {
                    node.hover = false;
                }
            }
        }
        if self.pressed.is_some_and(|pressed| self.is_ancestor_or_self(id, pressed)) {
            if let Some(pressed) = self.pressed.take() {
                if let Some(node) = self.node_mut(pressed) {
                    node.pressed = false;
                }
            }
        }
        if self.focus.is_some_and(|focus| self.is_ancestor_or_self(id, focus)) {
            self.set_focus(None);
        }
    }

    /// Register a periodic callback on a container
    ///
    /// `repeat` counts the remaining fires; a negative value repeats forever.
    /// The period must be positive.
    pub fn listen_interval(
        &mut self,
        container: NodeId,
        interval: f32,
        callback: Action,
        repeat: i32,
    ) -> Result<(), GuiError> {
        if interval.is_nan() || interval <= 0.0 {
            log::warn!("Rejected interval event on {:?} with period {}", container, interval);
            return Err(GuiError::InvalidInterval);
        }
        self.node_mut(container)
            .ok_or(GuiError::UnknownNode(container))?
            .container_mut()
            .ok_or(GuiError::NotAContainer(container))?
            .intervals
            .push(IntervalEvent { interval, timer: 0.0, repeat, callback });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Registry

    /// Store a node under a name; the registry keeps it alive
    pub fn store(&mut self, name: impl Into<String>, id: NodeId) -> Result<(), GuiError> {
        if !self.contains(id) {
            return Err(GuiError::UnknownNode(id));
        }
        let name = name.into();
        self.retain(id);
        log::debug!("Stored {:?} as '{}'", id, name);
        if let Some(previous) = self.storage.insert(name, id) {
            self.release_ref(previous);
        }
        Ok(())
    }

    /// Node stored under a name
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.storage.get(name).copied().filter(|&id| self.contains(id))
    }

    /// Remove a name from the registry; returns whether it was present
    pub fn unstore(&mut self, name: &str) -> bool {
        match self.storage.remove(name) {
            Some(id) => {
                log::debug!("Unstored '{}'", name);
                self.release_ref(id);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Pages

    /// Show a page of the menu
    pub fn set_page(&mut self, name: &str, history: bool) -> Result<(), GuiError> {
        let menu = self.menu;
        self.with_widget(menu, |pages: &mut PagesControl, cx| pages.set_page(cx, name, history))?
    }

    /// Go back to the previous page of the menu
    pub fn back(&mut self) -> Result<(), GuiError> {
        let menu = self.menu;
        self.with_widget(menu, |pages: &mut PagesControl, cx| pages.back(cx))?
    }

    // ------------------------------------------------------------------
    // Focus and interaction state

    /// Node under the cursor
    pub fn hovered(&self) -> Option<NodeId> {
        self.hover
    }

    /// Node holding the current press
    pub fn pressed(&self) -> Option<NodeId> {
        self.pressed
    }

    /// Focused node
    pub fn get_focused(&self) -> Option<NodeId> {
        self.focus
    }

    /// Whether the focused widget captures all keyboard input (e.g. a text box)
    pub fn is_focus_caught(&self) -> bool {
        self.focus
            .and_then(|id| self.nodes.get(id))
            .and_then(|slot| slot.widget.as_ref())
            .is_some_and(|widget| widget.is_focus_keeper())
    }

    /// Move focus; the previous holder is defocused first
    pub fn set_focus(&mut self, target: Option<NodeId>) {
        if self.focus == target {
            return;
        }
        if let Some(previous) = self.focus.take() {
            if let Some(node) = self.node_mut(previous) {
                node.focused = false;
            }
            log::trace!("Defocus {:?}", previous);
            self.dispatch_hook(previous, |widget, cx| widget.defocus(cx));
        }
        let Some(target) = target else { return };
        let Some(node) = self.node_mut(target) else { return };
        node.focused = true;
        self.focus = Some(target);
        log::trace!("Focus {:?}", target);
        self.dispatch_hook(target, |widget, cx| widget.focus(cx));
    }

    /// Release focus if `id` holds it
    pub fn defocus(&mut self, id: NodeId) {
        if self.focus == Some(id) {
            self.set_focus(None);
        }
    }

    // ------------------------------------------------------------------
    // Input feeding

    /// Cursor moved
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.input.update_mouse_position(x, y);
    }

    /// Mouse button changed
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.input.update_mouse_button(button, pressed);
    }

    /// Key pressed or repeated
    pub fn key_down(&mut self, key: KeyCode) {
        self.input.key_down(key);
    }

    /// Key released
    pub fn key_up(&mut self, key: KeyCode) {
        self.input.key_up(key);
    }

    /// Character typed
    pub fn char_typed(&mut self, ch: char) {
        self.input.char_typed(ch);
    }

    /// Wheel moved
    pub fn scroll(&mut self, steps: i32) {
        self.input.scroll(steps);
    }

    /// Modifier keys changed
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.input.set_modifiers(modifiers);
    }

    /// Lock the cursor to the application; the GUI ignores the mouse meanwhile
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.input.set_cursor_locked(locked);
    }

    /// Install the clipboard text provider
    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Some(Box::new(clipboard));
    }

    /// Current clipboard text
    pub fn clipboard_text(&self) -> Option<String> {
        self.clipboard.as_ref().and_then(|clipboard| clipboard.text())
    }

    /// Window size changed
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    // ------------------------------------------------------------------
    // Frame

    /// Update state and dispatch this frame's input
    pub fn act(&mut self, delta: f32) {
        let root = self.root;
        let viewport = self.viewport;
        self.set_size(root, viewport);
        self.act_node(root, delta);

        let prev_focus = self.focus;
        if !self.input.cursor_locked() {
            self.act_mouse();
        }
        self.act_focused(prev_focus);

        if let Some(focus) = self.focus {
            if !self.node(focus).is_some_and(|node| node.focused) {
                self.focus = None;
            }
        }
        self.input.reset_frame_flags();
    }

    fn act_mouse(&mut self) {
        let cursor = self.input.cursor();
        let root = self.root;
        let hover = self.get_at(root, cursor).filter(|&id| id != root);

        if let Some(previous) = self.hover {
            if Some(previous) != hover {
                if let Some(node) = self.node_mut(previous) {
                    node.hover = false;
                }
            }
        }
        self.hover = hover;
        if let Some(hover) = hover {
            if let Some(node) = self.node_mut(hover) {
                node.hover = true;
            }
            let steps = self.input.scroll_steps();
            if steps != 0 {
                self.scroll_node(hover, steps);
            }
        }

        if self.input.just_pressed(MouseButton::Left) {
            match (self.pressed, self.hover) {
                (None, Some(target)) => {
                    self.pressed = Some(target);
                    if let Some(node) = self.node_mut(target) {
                        node.pressed = true;
                    }
                    log::trace!("Press {:?} at {:?}", target, cursor);
                    self.dispatch_hook(target, move |widget, cx| widget.click(cx, cursor.x, cursor.y));
                    self.set_focus(Some(target));
                }
                (_, None) => self.set_focus(None),
                _ => {}
            }
        } else if !self.input.is_down(MouseButton::Left) {
            if let Some(pressed) = self.pressed.take() {
                if let Some(node) = self.node_mut(pressed) {
                    node.pressed = false;
                }
                log::trace!("Release {:?} at {:?}", pressed, cursor);
                self.dispatch_hook(pressed, move |widget, cx| widget.mouse_release(cx, cursor.x, cursor.y));
            }
        }
    }

    /// Deliver keyboard and focus-bound mouse input to the focused node
    ///
    /// A node that gained focus this frame only receives `mouse_move`; the
    /// press that focused it is not replayed as `clicked`.
    fn act_focused(&mut self, prev_focus: Option<NodeId>) {
        let Some(focus) = self.focus else { return };
        if self.input.key_just_pressed(KeyCode::Escape) {
            self.set_focus(None);
            return;
        }

        if prev_focus == Some(focus) {
            let typed = self.input.typed_chars().to_vec();
            for ch in typed {
                if self.focus != Some(focus) {
                    return;
                }
                self.dispatch_hook(focus, move |widget, cx| widget.typed(cx, ch));
            }
            let keys = self.input.pressed_keys().to_vec();
            for key in keys {
                if self.focus != Some(focus) {
                    return;
                }
                self.dispatch_hook(focus, move |widget, cx| widget.key_pressed(cx, key));
            }
        }

        if self.input.cursor_locked() || self.focus != Some(focus) {
            return;
        }
        let input = &self.input;
        if input.is_down(MouseButton::Left)
            && (input.just_pressed(MouseButton::Left) || input.cursor_delta() != Vec2::zeros())
        {
            let cursor = input.cursor();
            self.dispatch_hook(focus, move |widget, cx| widget.mouse_move(cx, cursor.x, cursor.y));
        }

        if prev_focus == Some(focus) {
            let buttons: Vec<MouseButton> = self.input.pressed_buttons().collect();
            for button in buttons {
                if self.focus != Some(focus) {
                    return;
                }
                self.dispatch_hook(focus, move |widget, cx| widget.clicked(cx, button));
            }
        }
    }

    /// Draw the whole tree; the menu is centered on the viewport first
    pub fn draw(&mut self, surface: &mut dyn Surface, assets: &dyn Assets) {
        let menu = self.menu;
        let viewport = self.viewport;
        if let Some(node) = self.node_mut(menu) {
            node.position = (viewport - node.size) / 2.0;
        }
        let root = self.root;
        self.draw_node(root, surface, assets);
    }

    fn draw_node(&mut self, id: NodeId, surface: &mut dyn Surface, assets: &dyn Assets) {
        if !self.node(id).is_some_and(|node| node.visible) {
            return;
        }
        if let Some(mut widget) = self.begin_hook(id) {
            {
                let mut cx = DrawCx::new(WidgetCx::new(self, id), surface, assets);
                widget.draw(&mut cx);
            }
            self.finish_hook(id, widget);
        }

        let Some(node) = self.node(id) else { return };
        if !node.is_container() {
            return;
        }
        let bounds = Rect::from_pos_size(self.calc_coord(id), node.size).clamped();
        let children = self.children(id).to_vec();
        surface.push_scissor(bounds);
        for child in children {
            self.draw_node(child, surface, assets);
        }
        surface.pop_scissor();
    }

    // ------------------------------------------------------------------
    // Hook dispatch

    /// Check a widget out of its slot; `None` if the node is gone or busy
    fn begin_hook(&mut self, id: NodeId) -> Option<Box<dyn Widget>> {
        let widget = self.nodes.get_mut(id)?.widget.take()?;
        self.depth += 1;
        Some(widget)
    }

    /// Put a widget back and run deferred work once no hook is running
    fn finish_hook(&mut self, id: NodeId, widget: Box<dyn Widget>) {
        if let Some(slot) = self.nodes.get_mut(id) {
            slot.widget = Some(widget);
        }
        self.end_hook();
    }

    fn end_hook(&mut self) {
        self.depth -= 1;
        if self.depth == 0 && !self.flushing {
            self.flushing = true;
            while let Some(job) = self.deferred.pop_front() {
                job(self);
            }
            self.flushing = false;
        }
    }

    /// Run `f` on a node's widget; `None` if the node is gone or busy
    pub(crate) fn dispatch<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut WidgetCx<'_>) -> R,
    ) -> Option<R> {
        let mut widget = self.begin_hook(id)?;
        let result = f(widget.as_mut(), &mut WidgetCx::new(self, id));
        self.finish_hook(id, widget);
        Some(result)
    }

    /// Like [`dispatch`](Self::dispatch), but a busy widget gets the hook once it is free
    pub(crate) fn dispatch_hook<R: 'static>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut WidgetCx<'_>) -> R + 'static,
    ) -> Option<R> {
        let busy = self.nodes.get(id).is_some_and(|slot| slot.widget.is_none());
        if busy {
            self.deferred.push_back(Box::new(move |gui: &mut Gui| {
                gui.dispatch(id, f);
            }));
            return None;
        }
        self.dispatch(id, f)
    }

    /// Queue an action; it runs right away when no hook is running
    pub(crate) fn queue_action(&mut self, action: Action) {
        if self.depth == 0 {
            action(self);
        } else {
            self.deferred.push_back(Box::new(move |gui: &mut Gui| action(gui)));
        }
    }
}
