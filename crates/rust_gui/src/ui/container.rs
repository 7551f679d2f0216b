//! Container state: ordered children, auto-layout, scrolling, interval events

use super::gui::Gui;
use super::node::{Insets, NodeId, Orientation};
use super::widget::Action;
use crate::foundation::math::Vec2;

/// Callback fired periodically by a container's `act`
#[derive(Clone)]
pub struct IntervalEvent {
    /// Seconds between firings
    pub interval: f32,
    /// Time accumulated since the last firing
    pub timer: f32,
    /// Remaining firings; negative repeats forever
    pub repeat: i32,
    /// Callback
    pub callback: Action,
}

impl std::fmt::Debug for IntervalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalEvent")
            .field("interval", &self.interval)
            .field("timer", &self.timer)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}

/// State of a node that holds children
#[derive(Debug, Clone)]
pub struct ContainerState {
    pub(crate) children: Vec<NodeId>,
    /// Stacking axis; `None` leaves child positions alone
    pub orientation: Option<Orientation>,
    /// Inner spacing between the box and the children
    pub padding: Insets,
    /// Extra spacing between consecutive children
    pub interval: f32,
    /// Whether wheel input scrolls this container
    pub scrollable: bool,
    /// Cap on the height of a container that follows its content
    pub max_length: Option<f32>,
    /// Grow the width to the content and follow the content height
    pub fit_content: bool,
    pub(crate) scroll: f32,
    pub(crate) actual_length: f32,
    pub(crate) intervals: Vec<IntervalEvent>,
}

impl Default for ContainerState {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            orientation: None,
            padding: Insets::zero(),
            interval: 0.0,
            scrollable: true,
            max_length: None,
            fit_content: false,
            scroll: 0.0,
            actual_length: 0.0,
            intervals: Vec::new(),
        }
    }
}

impl ContainerState {
    /// Plain container: no padding, no layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Container with padding and no layout
    pub fn with_padding(padding: Insets) -> Self {
        Self { padding, ..Self::default() }
    }

    /// Children in draw order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Current scroll offset (zero or negative)
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Content extent along the scroll axis, as of the last layout
    pub fn actual_length(&self) -> f32 {
        self.actual_length
    }

    /// Offset applied to children positions
    pub fn content_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.scroll)
    }

    /// Inner content area for a box of `size`, clamped at zero
    pub fn content_size(&self, size: Vec2) -> Vec2 {
        let inner = size - self.padding.size();
        Vec2::new(inner.x.max(0.0), inner.y.max(0.0))
    }

    /// Advance interval timers, returning the callbacks that fired
    pub(crate) fn advance_intervals(&mut self, delta: f32) -> Vec<Action> {
        let mut fired = Vec::new();
        for event in &mut self.intervals {
            event.timer += delta;
            if event.timer > event.interval {
                fired.push(event.callback.clone());
                event.timer %= event.interval;
                if event.repeat > 0 {
                    event.repeat -= 1;
                }
            }
        }
        self.intervals.retain(|event| event.repeat != 0);
        fired
    }

    /// Clamp scroll into `[-(actual_length - height), 0]`
    pub(crate) fn clamp_scroll(&mut self, height: f32) {
        let overflow = (self.actual_length - height).max(0.0);
        self.scroll = self.scroll.clamp(-overflow, 0.0);
    }
}

impl Gui {
    /// Restack the children of an oriented container
    pub(crate) fn layout(&mut self, id: NodeId) {
        let Some(node) = self.node(id) else { return };
        let Some(container) = node.container() else { return };
        let Some(orientation) = container.orientation else { return };
        let size = node.size;
        let padding = container.padding;
        let interval = container.interval;
        let fit_content = container.fit_content;
        let max_length = container.max_length;
        let children = container.children.clone();

        let mut content_width = size.x;
        let mut content_height = size.y;
        let actual_length = match orientation {
            Orientation::Vertical => {
                let x = padding.left;
                let mut y = padding.top;
                for child in children {
                    let Some(node) = self.node_mut(child) else { continue };
                    let margin = node.margin;
                    y += margin.top;
                    node.position = Vec2::new(x + margin.left, y);
                    y += node.size.y + margin.bottom + interval;
                    if node.resizing {
                        node.size.x = (size.x - padding.horizontal() - margin.horizontal()).max(0.0);
                    }
                    self.refresh(child);
                    if let Some(node) = self.node(child) {
                        content_width =
                            content_width.max(node.position.x + node.size.x + margin.right + padding.right);
                    }
                }
                y + padding.bottom
            }
            Orientation::Horizontal => {
                let mut x = padding.left;
                let y = padding.top;
                for child in children {
                    let Some(node) = self.node_mut(child) else { continue };
                    let margin = node.margin;
                    x += margin.left;
                    node.position = Vec2::new(x, y + margin.top);
                    x += node.size.x + margin.right + interval;
                    self.refresh(child);
                    if let Some(node) = self.node(child) {
                        content_height =
                            content_height.max(node.position.y + node.size.y + margin.bottom + padding.bottom);
                    }
                }
                content_width = content_width.max(x + padding.right);
                content_height
            }
        };

        let Some(node) = self.node_mut(id) else { return };
        if fit_content {
            let height = max_length.map_or(actual_length, |max| max.min(actual_length));
            node.size = Vec2::new(content_width, height);
        } else if let Some(max) = max_length {
            node.size.y = max.min(actual_length);
        }
        let height = node.size.y;
        if let Some(container) = node.container_mut() {
            container.actual_length = actual_length;
            container.clamp_scroll(height);
        }
    }

    /// Scroll the node under the cursor, bubbling to ancestors that can take it
    pub(crate) fn scroll_node(&mut self, id: NodeId, value: i32) {
        let step = self.config().scroll_step;
        let mut current = Some(id);
        while let Some(id) = current {
            if self.dispatch_hook(id, move |widget, cx| widget.scrolled(cx, value)) == Some(true) {
                return;
            }
            let Some(node) = self.node_mut(id) else { return };
            let height = node.size.y;
            let parent = node.parent;
            if let Some(container) = node.container_mut() {
                if container.scrollable && container.actual_length > height {
                    container.scroll += value as f32 * step;
                    container.clamp_scroll(height);
                    log::trace!("Scrolled {:?} to {}", id, container.scroll);
                    return;
                }
            }
            current = parent;
        }
    }

    /// Run interval events of every visible container below `id`, then widget `act`
    pub(crate) fn act_node(&mut self, id: NodeId, delta: f32) {
        let fired = match self.node_mut(id).and_then(|node| node.container_mut()) {
            Some(container) => container.advance_intervals(delta),
            None => Vec::new(),
        };
        for callback in fired {
            callback(self);
        }

        self.dispatch_hook(id, move |widget, cx| widget.act(cx, delta));

        let children = self.children(id).to_vec();
        for child in children {
            if self.node(child).is_some_and(|node| node.visible) {
                self.act_node(child, delta);
            }
        }
    }
}
