//! Input vocabulary
//!
//! Backend-neutral key, button, action and modifier types carried by window
//! events. Platform backends translate their native codes into these.

use bitflags::bitflags;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Top-row digit 0
    Num0,
    /// Top-row digit 1
    Num1,
    /// Top-row digit 2
    Num2,
    /// Top-row digit 3
    Num3,
    /// Top-row digit 4
    Num4,
    /// Top-row digit 5
    Num5,
    /// Top-row digit 6
    Num6,
    /// Top-row digit 7
    Num7,
    /// Top-row digit 8
    Num8,
    /// Top-row digit 9
    Num9,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Function key F1 to F12
    Function(u8),
    /// Any key without a mapping
    Unknown,
}

impl KeyCode {
    /// Map an ASCII letter or digit to its key code
    pub fn from_char(c: char) -> Option<Self> {
        const LETTERS: [KeyCode; 26] = [
            KeyCode::A, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F, KeyCode::G,
            KeyCode::H, KeyCode::I, KeyCode::J, KeyCode::K, KeyCode::L, KeyCode::M, KeyCode::N,
            KeyCode::O, KeyCode::P, KeyCode::Q, KeyCode::R, KeyCode::S, KeyCode::T, KeyCode::U,
            KeyCode::V, KeyCode::W, KeyCode::X, KeyCode::Y, KeyCode::Z,
        ];
        const DIGITS: [KeyCode; 10] = [
            KeyCode::Num0,
            KeyCode::Num1,
            KeyCode::Num2,
            KeyCode::Num3,
            KeyCode::Num4,
            KeyCode::Num5,
            KeyCode::Num6,
            KeyCode::Num7,
            KeyCode::Num8,
            KeyCode::Num9,
        ];

        let upper = c.to_ascii_uppercase();
        match upper {
            'A'..='Z' => Some(LETTERS[(upper as u8 - b'A') as usize]),
            '0'..='9' => Some(DIGITS[(upper as u8 - b'0') as usize]),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Extra buttons, numbered from 4
    Other(u8),
}

/// State change reported for a key or mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Pressed down
    Press,
    /// Let go
    Release,
    /// Held long enough to auto-repeat (keys only)
    Repeat,
}

bitflags! {
    /// Modifier keys held while an input event occurred
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 1 << 0;
        /// Either control key
        const CONTROL = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
        /// Either super (command / windows) key
        const SUPER = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char() {
        assert_eq!(KeyCode::from_char('a'), Some(KeyCode::A));
        assert_eq!(KeyCode::from_char('Z'), Some(KeyCode::Z));
        assert_eq!(KeyCode::from_char('7'), Some(KeyCode::Num7));
        assert_eq!(KeyCode::from_char(' '), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_char('#'), None);
    }

    #[test]
    fn test_modifiers_combine() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(Modifiers::default().is_empty());
    }
}
