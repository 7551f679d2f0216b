//! Geometric node: the base state every widget in the tree carries
//!
//! Margin is the outer spacing a parent layout leaves around the node; it is
//! not part of the node's own box. Padding belongs to containers and is the
//! inset between their box and their children.
//!
//! ```text
//!  +=============================== container ================================+
//!  |            padding.top                                                   |
//!  |  padding   +-----------------------------------------------+   padding   |
//!  |  .left     |  margin.top                                   |   .right    |
//!  |            |  margin  +==== child ====+  margin            |             |
//!  |            |  .left   |               |  .right            |             |
//!  |            |          +===============+                    |             |
//!  |            |  margin.bottom                                |             |
//!  |            +-----------------------------------------------+             |
//!  |            padding.bottom                                                |
//!  +==========================================================================+
//! ```

use super::container::ContainerState;
use crate::foundation::math::{Color, Vec2};

slotmap::new_key_type! {
    /// Stable handle to a node in a [`Gui`](super::Gui)
    ///
    /// Handles are non-owning: once the node is destroyed the handle resolves
    /// to nothing.
    pub struct NodeId;
}

/// Spacing on the four sides of a box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    /// Left side
    pub left: f32,
    /// Top side
    pub top: f32,
    /// Right side
    pub right: f32,
    /// Bottom side
    pub bottom: f32,
}

impl Insets {
    /// Create insets from the four sides
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same spacing on every side
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// No spacing
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Left + right
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top + bottom
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total spacing as a size
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }

    /// Top-left offset
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-aligned text
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

impl Align {
    /// Share of the free space placed before the text
    pub fn factor(self) -> f32 {
        match self {
            Align::Left => 0.0,
            Align::Center => 0.5,
            Align::Right => 1.0,
        }
    }
}

/// Axis along which a container stacks its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Top to bottom
    Vertical,
    /// Left to right
    Horizontal,
}

/// Base state of a tree node
///
/// Geometry and colors are public; writing `size` directly skips layout, use
/// [`Gui::set_size`](super::Gui::set_size) when the parent should restack.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position relative to the parent's content origin
    pub position: Vec2,
    /// Size of the node's own box
    pub size: Vec2,
    /// Outer spacing used by the parent layout
    pub margin: Insets,
    /// Base color
    pub color: Color,
    /// Color while hovered
    pub hover_color: Color,
    /// Color while pressed
    pub pressed_color: Color,
    /// Color while focused
    pub focused_color: Color,
    /// Hidden nodes are neither drawn nor hit
    pub visible: bool,
    /// Non-interactive nodes (and their subtree) are transparent to the mouse
    pub interactive: bool,
    /// Whether a vertical parent layout may stretch the width
    pub resizing: bool,

    pub(crate) hover: bool,
    pub(crate) pressed: bool,
    pub(crate) focused: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) container: Option<ContainerState>,

    /// Owning references: parent membership, registry names, page lists
    pub(crate) owners: u32,
    /// Created and never owned yet
    pub(crate) floating: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}

impl Node {
    /// Create a visible, interactive node of the given size
    pub fn new(size: Vec2) -> Self {
        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        Self {
            position: Vec2::zeros(),
            size,
            margin: Insets::zero(),
            color: white,
            hover_color: white,
            pressed_color: white,
            focused_color: white,
            visible: true,
            interactive: true,
            resizing: true,
            hover: false,
            pressed: false,
            focused: false,
            parent: None,
            container: None,
            owners: 0,
            floating: true,
        }
    }

    /// Whether the cursor is over this node
    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    /// Whether this node received the current press
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether this node holds focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Parent container (non-owning)
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Container state, if this node holds children
    pub fn container(&self) -> Option<&ContainerState> {
        self.container.as_ref()
    }

    /// Mutable container state
    pub fn container_mut(&mut self) -> Option<&mut ContainerState> {
        self.container.as_mut()
    }

    /// Whether this node holds children
    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    /// Offset applied to children (scroll)
    pub fn content_offset(&self) -> Vec2 {
        self.container
            .as_ref()
            .map_or_else(Vec2::zeros, ContainerState::content_offset)
    }

    /// Background color for the current interaction state: pressed over hover over base
    pub fn state_color(&self) -> Color {
        if self.pressed {
            self.pressed_color
        } else if self.hover {
            self.hover_color
        } else {
            self.color
        }
    }
}
