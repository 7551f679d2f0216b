//! Input bindings and clipboard access

use super::keys::{KeyCode, MouseButton};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Device a binding listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    /// Keyboard key
    Keyboard,
    /// Mouse button
    Mouse,
}

/// A rebindable control: device type plus the key or button code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    /// Device
    pub kind: InputType,
    /// Key code or mouse button code, depending on `kind`
    pub code: u32,
}

/// Binding shared between the application and an `InputBindBox`
pub type SharedBinding = Rc<RefCell<Binding>>;

impl Binding {
    /// Binding to a keyboard key
    pub const fn key(key: KeyCode) -> Self {
        Self { kind: InputType::Keyboard, code: key.code() }
    }

    /// Binding to a mouse button
    pub const fn mouse(button: MouseButton) -> Self {
        Self { kind: InputType::Mouse, code: button.code() }
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> SharedBinding {
        Rc::new(RefCell::new(self))
    }

    /// Human-readable description
    pub fn text(&self) -> String {
        match self.kind {
            InputType::Keyboard => KeyCode::from_code(self.code)
                .map_or_else(|| format!("key {}", self.code), |key| key.name().to_string()),
            InputType::Mouse => MouseButton::from_code(self.code)
                .map_or_else(|| format!("mouse button {}", self.code), |b| b.name().to_string()),
        }
    }
}

/// Clipboard text provider
pub trait Clipboard {
    /// Current clipboard text, if any
    fn text(&self) -> Option<String>;
}

impl<F> Clipboard for F
where
    F: Fn() -> Option<String>,
{
    fn text(&self) -> Option<String> {
        self()
    }
}
