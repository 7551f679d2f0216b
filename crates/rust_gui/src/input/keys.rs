//! Key codes, mouse buttons and modifier flags
//!
//! Numeric codes follow the GLFW key table so that codes stored in a
//! [`Binding`](super::Binding) stay meaningful to a GLFW-based host.

use bitflags::bitflags;

macro_rules! key_codes {
    ($($(#[$meta:meta])* $name:ident = $code:literal, $label:literal;)*) => {
        /// Keyboard key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeyCode {
            $($(#[$meta])* $name,)*
        }

        impl KeyCode {
            /// Numeric key code
            pub const fn code(self) -> u32 {
                match self {
                    $(Self::$name => $code,)*
                }
            }

            /// Key for a numeric code, if it is known
            pub const fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Human-readable key name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => $label,)*
                }
            }
        }
    };
}

key_codes! {
    /// Space bar
    Space = 32, "space";
    /// `'`
    Apostrophe = 39, "'";
    /// `,`
    Comma = 44, ",";
    /// `-`
    Minus = 45, "-";
    /// `.`
    Period = 46, ".";
    /// `/`
    Slash = 47, "/";
    /// 0
    Num0 = 48, "0";
    /// 1
    Num1 = 49, "1";
    /// 2
    Num2 = 50, "2";
    /// 3
    Num3 = 51, "3";
    /// 4
    Num4 = 52, "4";
    /// 5
    Num5 = 53, "5";
    /// 6
    Num6 = 54, "6";
    /// 7
    Num7 = 55, "7";
    /// 8
    Num8 = 56, "8";
    /// 9
    Num9 = 57, "9";
    /// `;`
    Semicolon = 59, ";";
    /// `=`
    Equal = 61, "=";
    /// A key
    A = 65, "a";
    /// B key
    B = 66, "b";
    /// C key
    C = 67, "c";
    /// D key
    D = 68, "d";
    /// E key
    E = 69, "e";
    /// F key
    F = 70, "f";
    /// G key
    G = 71, "g";
    /// H key
    H = 72, "h";
    /// I key
    I = 73, "i";
    /// J key
    J = 74, "j";
    /// K key
    K = 75, "k";
    /// L key
    L = 76, "l";
    /// M key
    M = 77, "m";
    /// N key
    N = 78, "n";
    /// O key
    O = 79, "o";
    /// P key
    P = 80, "p";
    /// Q key
    Q = 81, "q";
    /// R key
    R = 82, "r";
    /// S key
    S = 83, "s";
    /// T key
    T = 84, "t";
    /// U key
    U = 85, "u";
    /// V key
    V = 86, "v";
    /// W key
    W = 87, "w";
    /// X key
    X = 88, "x";
    /// Y key
    Y = 89, "y";
    /// Z key
    Z = 90, "z";
    /// `[`
    LeftBracket = 91, "[";
    /// `\`
    Backslash = 92, "\\";
    /// `]`
    RightBracket = 93, "]";
    /// `` ` ``
    GraveAccent = 96, "`";
    /// Escape
    Escape = 256, "escape";
    /// Enter/Return
    Enter = 257, "enter";
    /// Tab
    Tab = 258, "tab";
    /// Backspace
    Backspace = 259, "backspace";
    /// Insert
    Insert = 260, "insert";
    /// Delete
    Delete = 261, "delete";
    /// Right arrow
    Right = 262, "right";
    /// Left arrow
    Left = 263, "left";
    /// Down arrow
    Down = 264, "down";
    /// Up arrow
    Up = 265, "up";
    /// Page up
    PageUp = 266, "page-up";
    /// Page down
    PageDown = 267, "page-down";
    /// Home
    Home = 268, "home";
    /// End
    End = 269, "end";
    /// Caps lock
    CapsLock = 280, "caps-lock";
    /// F1
    F1 = 290, "f1";
    /// F2
    F2 = 291, "f2";
    /// F3
    F3 = 292, "f3";
    /// F4
    F4 = 293, "f4";
    /// F5
    F5 = 294, "f5";
    /// F6
    F6 = 295, "f6";
    /// F7
    F7 = 296, "f7";
    /// F8
    F8 = 297, "f8";
    /// F9
    F9 = 298, "f9";
    /// F10
    F10 = 299, "f10";
    /// F11
    F11 = 300, "f11";
    /// F12
    F12 = 301, "f12";
    /// Left shift
    LeftShift = 340, "left-shift";
    /// Left control
    LeftControl = 341, "left-ctrl";
    /// Left alt
    LeftAlt = 342, "left-alt";
    /// Left super
    LeftSuper = 343, "left-super";
    /// Right shift
    RightShift = 344, "right-shift";
    /// Right control
    RightControl = 345, "right-ctrl";
    /// Right alt
    RightAlt = 346, "right-alt";
    /// Right super
    RightSuper = 347, "right-super";
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Fourth (back) button
    Button4,
    /// Fifth (forward) button
    Button5,
}

impl MouseButton {
    /// All buttons, in code order
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Middle, Self::Button4, Self::Button5];

    /// Numeric button code
    pub const fn code(self) -> u32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Button4 => 3,
            Self::Button5 => 4,
        }
    }

    /// Button for a numeric code
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Middle),
            3 => Some(Self::Button4),
            4 => Some(Self::Button5),
            _ => None,
        }
    }

    /// Human-readable button name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left mouse button",
            Self::Right => "right mouse button",
            Self::Middle => "middle mouse button",
            Self::Button4 => "mouse button 4",
            Self::Button5 => "mouse button 5",
        }
    }

    pub(crate) const fn mask(self) -> u8 {
        1 << self.code()
    }
}

bitflags! {
    /// Modifier keys reported by the windowing layer
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 1 << 0;
        /// Either control key
        const CONTROL = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
        /// Either super/command key
        const SUPER = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_roundtrip() {
        for key in [KeyCode::A, KeyCode::Escape, KeyCode::F12, KeyCode::RightSuper, KeyCode::Num0] {
            assert_eq!(KeyCode::from_code(key.code()), Some(key));
        }
        assert_eq!(KeyCode::from_code(1000), None);
    }

    #[test]
    fn test_mouse_button_codes() {
        for button in MouseButton::ALL {
            assert_eq!(MouseButton::from_code(button.code()), Some(button));
        }
        assert_eq!(MouseButton::Middle.mask(), 0b100);
    }
}
