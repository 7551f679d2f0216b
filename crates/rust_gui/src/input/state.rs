//! Per-frame input state
//!
//! The windowing layer feeds discrete events in; the GUI reads them during
//! `act` and then resets the per-frame flags.

use super::keys::{KeyCode, Modifiers, MouseButton};
use crate::foundation::math::Vec2;

/// Input gathered between two GUI frames
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current cursor position in screen coordinates
    cursor: Vec2,
    /// Cursor position when the frame began
    frame_start_cursor: Vec2,

    /// Mouse buttons currently held (bit per button code)
    buttons_down: u8,
    /// Mouse buttons that went down this frame
    buttons_pressed: u8,
    /// Mouse buttons that went up this frame
    buttons_released: u8,

    /// Keys currently held
    keys_down: Vec<KeyCode>,
    /// Key presses this frame, repeats included, in arrival order
    keys_pressed: Vec<KeyCode>,
    /// Characters typed this frame
    typed: Vec<char>,

    /// Accumulated wheel steps this frame
    scroll: i32,
    /// Modifier flags reported by the host
    modifiers: Modifiers,
    /// Cursor captured by the application (e.g. camera look); the GUI ignores the mouse
    cursor_locked: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self {
            cursor: Vec2::zeros(),
            frame_start_cursor: Vec2::zeros(),
            buttons_down: 0,
            buttons_pressed: 0,
            buttons_released: 0,
            keys_down: Vec::new(),
            keys_pressed: Vec::new(),
            typed: Vec::new(),
            scroll: 0,
            modifiers: Modifiers::empty(),
            cursor_locked: false,
        }
    }

    /// Update cursor position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let mask = button.mask();
        let was_down = self.buttons_down & mask != 0;
        if pressed {
            self.buttons_down |= mask;
            if !was_down {
                self.buttons_pressed |= mask;
            }
        } else {
            self.buttons_down &= !mask;
            if was_down {
                self.buttons_released |= mask;
            }
        }
    }

    /// Record a key press (repeats are recorded again)
    pub fn key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_down.push(key);
        }
        self.keys_pressed.push(key);
    }

    /// Record a key release
    pub fn key_up(&mut self, key: KeyCode) {
        self.keys_down.retain(|&k| k != key);
    }

    /// Record a typed character
    pub fn char_typed(&mut self, ch: char) {
        self.typed.push(ch);
    }

    /// Record wheel movement
    pub fn scroll(&mut self, steps: i32) {
        self.scroll += steps;
    }

    /// Replace the modifier flags
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Lock or unlock the cursor
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
    }

    /// Reset per-frame input flags (call after the GUI has consumed them)
    pub fn reset_frame_flags(&mut self) {
        self.frame_start_cursor = self.cursor;
        self.buttons_pressed = 0;
        self.buttons_released = 0;
        self.keys_pressed.clear();
        self.typed.clear();
        self.scroll = 0;
    }

    /// Current cursor position
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor movement since the frame began
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor - self.frame_start_cursor
    }

    /// Whether the button is held
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.buttons_down & button.mask() != 0
    }

    /// Whether the button went down this frame
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed & button.mask() != 0
    }

    /// Whether the button went up this frame
    pub fn just_released(&self, button: MouseButton) -> bool {
        self.buttons_released & button.mask() != 0
    }

    /// Buttons that went down this frame, in code order
    pub fn pressed_buttons(&self) -> impl Iterator<Item = MouseButton> + '_ {
        MouseButton::ALL.into_iter().filter(|&b| self.just_pressed(b))
    }

    /// Whether the key is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether the key was pressed this frame
    pub fn key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Key presses this frame
    pub fn pressed_keys(&self) -> &[KeyCode] {
        &self.keys_pressed
    }

    /// Characters typed this frame
    pub fn typed_chars(&self) -> &[char] {
        &self.typed
    }

    /// Wheel steps this frame
    pub fn scroll_steps(&self) -> i32 {
        self.scroll
    }

    /// Whether either control key is held
    pub fn ctrl_held(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
            || self.is_key_down(KeyCode::LeftControl)
            || self.is_key_down(KeyCode::RightControl)
    }

    /// Whether the cursor is captured by the application
    pub fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_edges() {
        let mut input = InputState::new();

        input.update_mouse_button(MouseButton::Left, true);
        assert!(input.just_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));

        input.reset_frame_flags();
        assert!(!input.just_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));

        input.update_mouse_button(MouseButton::Left, false);
        assert!(input.just_released(MouseButton::Left));
        assert!(!input.is_down(MouseButton::Left));
    }

    #[test]
    fn test_repeated_press_is_not_a_new_edge() {
        let mut input = InputState::new();
        input.update_mouse_button(MouseButton::Right, true);
        input.reset_frame_flags();
        input.update_mouse_button(MouseButton::Right, true);
        assert!(!input.just_pressed(MouseButton::Right));
    }

    #[test]
    fn test_ctrl_from_key_or_modifier() {
        let mut input = InputState::new();
        assert!(!input.ctrl_held());

        input.key_down(KeyCode::LeftControl);
        assert!(input.ctrl_held());
        input.key_up(KeyCode::LeftControl);
        assert!(!input.ctrl_held());

        input.set_modifiers(Modifiers::CONTROL);
        assert!(input.ctrl_held());
    }

    #[test]
    fn test_cursor_delta_resets_each_frame() {
        let mut input = InputState::new();
        input.update_mouse_position(10.0, 5.0);
        assert_eq!(input.cursor_delta(), Vec2::new(10.0, 5.0));
        input.reset_frame_flags();
        assert_eq!(input.cursor_delta(), Vec2::zeros());
    }
}
