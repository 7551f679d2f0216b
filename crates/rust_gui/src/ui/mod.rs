//! UI module
//!
//! Retained widget tree owned by [`Gui`]:
//! - `node`: base geometry, colors and interaction flags of every node
//! - `container`: child lists, auto-layout, scrolling, interval events
//! - `widget`: the hook set widgets implement and the contexts hooks get
//! - `gui`: the controller (arena, focus, registry, frame loop)
//! - `widgets/`: the stock widget set

pub mod container;
pub mod error;
pub mod gui;
pub mod node;
pub mod widget;
pub mod widgets;

pub use container::{ContainerState, IntervalEvent};
pub use error::GuiError;
pub use gui::Gui;
pub use node::{Align, Insets, Node, NodeId, Orientation};
pub use widget::{Action, AsAny, Consumer, DrawCx, Runnable, Supplier, Validator, Widget, WidgetCx};

pub use widgets::{
    Button, CheckBox, Container, FullCheckBox, Image, InputBindBox, Label, PagesControl, Panel, RichButton,
    TextBox, TrackBar, DEFAULT_PADDING,
};
