//! # Rust GUI
//!
//! A retained-mode widget toolkit for game menus and tool panels.
//!
//! ## Features
//!
//! - **Widget Tree**: Containers with vertical/horizontal auto-layout, padding, margins and scrolling
//! - **Stock Widgets**: Labels, images, buttons, text boxes, track bars, check boxes, key binding boxes
//! - **Input Dispatch**: Hover, press and focus tracking driven by per-frame input
//! - **Data Binding**: Suppliers pull external state in, consumers push committed edits out
//! - **Menu Pages**: Named pages with back navigation
//! - **Backend Agnostic**: Draws through a small [`Surface`](rendering::Surface) trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_gui::prelude::*;
//!
//! let mut gui = Gui::new(GuiConfig::default());
//! let page = gui.spawn(Panel::new(Vec2::new(200.0, 100.0)));
//! let play = gui.spawn(Button::with_text("Play").on_action(|_| println!("play")));
//! gui.add_to(page, play).unwrap();
//! gui.with_widget(gui.menu(), |pages: &mut PagesControl, cx| pages.add_page(cx, "main", page))
//!     .unwrap()
//!     .unwrap();
//! gui.set_page("main", false).unwrap();
//!
//! let assets = AssetTable::new().with_font(MonoFont::new("normal", 8.0, 16.0));
//! let mut surface = CommandRecorder::new();
//! gui.update_mouse_position(400.0, 300.0);
//! gui.act(1.0 / 60.0);
//! gui.draw(&mut surface, &assets);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod rendering;
pub mod ui;

#[cfg(test)]
mod tests;

pub use ui::{Gui, GuiError, NodeId};

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        config::{Config, GuiConfig, Palette},
        foundation::math::{rgba, Color, Rect, Vec2},
        input::{Binding, InputType, KeyCode, Modifiers, MouseButton, SharedBinding},
        rendering::{AssetTable, Assets, CommandRecorder, DrawCommand, Font, MonoFont, Surface},
        ui::{
            Action, Align, Button, CheckBox, Container, DrawCx, FullCheckBox, Gui, GuiError, Image, InputBindBox,
            Insets, Label, Node, NodeId, Orientation, PagesControl, Panel, RichButton, TextBox, TrackBar, Widget,
            WidgetCx,
        },
    };
}
