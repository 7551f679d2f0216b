//! Input types consumed by the GUI
//!
//! - `keys`: key codes, mouse buttons, modifier flags
//! - `state`: per-frame input gathered from the windowing layer
//! - `binding`: rebindable controls and clipboard access

pub mod keys;
pub mod state;
pub mod binding;

pub use binding::{Binding, Clipboard, InputType, SharedBinding};
pub use keys::{KeyCode, Modifiers, MouseButton};
pub use state::InputState;
