//! Key press records and the key table
//!
//! Translates `rdev` keys into a symbolic name plus a PC/AT set-1 scan code.
//! Extended keys share the low byte of their set-1 code with the keypad key
//! in the same position, so Insert and keypad 0 both read 82.

use rdev::Key;

/// A single key press as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Symbolic key name, e.g. "up" or "numpad 0"
    pub name: String,
    /// Hardware scan code
    pub scan_code: u32,
}

impl KeyEvent {
    /// Create a key event from a name and scan code
    pub fn new(name: impl Into<String>, scan_code: u32) -> Self {
        Self {
            name: name.into(),
            scan_code,
        }
    }

    /// Build the key event for an `rdev` key
    pub fn from_key(key: Key) -> Self {
        match describe(key) {
            Some((name, scan_code)) => Self::new(name, scan_code),
            None => match key {
                Key::Unknown(code) => Self::new("unknown", native_scan_code(code)),
                other => Self::new(format!("{other:?}").to_lowercase(), 0),
            },
        }
    }
}

/// X11 keycodes are the evdev code offset by 8
#[cfg(target_os = "linux")]
fn native_scan_code(code: u32) -> u32 {
    code.saturating_sub(8)
}

#[cfg(not(target_os = "linux"))]
fn native_scan_code(code: u32) -> u32 {
    code
}

fn describe(key: Key) -> Option<(&'static str, u32)> {
    let entry = match key {
        Key::Escape => ("esc", 1),
        Key::Num1 => ("1", 2),
        Key::Num2 => ("2", 3),
        Key::Num3 => ("3", 4),
        Key::Num4 => ("4", 5),
        Key::Num5 => ("5", 6),
        Key::Num6 => ("6", 7),
        Key::Num7 => ("7", 8),
        Key::Num8 => ("8", 9),
        Key::Num9 => ("9", 10),
        Key::Num0 => ("0", 11),
        Key::Minus => ("-", 12),
        Key::Equal => ("=", 13),
        Key::Backspace => ("backspace", 14),
        Key::Tab => ("tab", 15),
        Key::KeyQ => ("q", 16),
        Key::KeyW => ("w", 17),
        Key::KeyE => ("e", 18),
        Key::KeyR => ("r", 19),
        Key::KeyT => ("t", 20),
        Key::KeyY => ("y", 21),
        Key::KeyU => ("u", 22),
        Key::KeyI => ("i", 23),
        Key::KeyO => ("o", 24),
        Key::KeyP => ("p", 25),
        Key::LeftBracket => ("[", 26),
        Key::RightBracket => ("]", 27),
        Key::Return => ("enter", 28),
        Key::ControlLeft => ("ctrl", 29),
        Key::KeyA => ("a", 30),
        Key::KeyS => ("s", 31),
        Key::KeyD => ("d", 32),
        Key::KeyF => ("f", 33),
        Key::KeyG => ("g", 34),
        Key::KeyH => ("h", 35),
        Key::KeyJ => ("j", 36),
        Key::KeyK => ("k", 37),
        Key::KeyL => ("l", 38),
        Key::SemiColon => (";", 39),
        Key::Quote => ("'", 40),
        Key::BackQuote => ("`", 41),
        Key::ShiftLeft => ("shift", 42),
        Key::BackSlash => ("\\", 43),
        Key::KeyZ => ("z", 44),
        Key::KeyX => ("x", 45),
        Key::KeyC => ("c", 46),
        Key::KeyV => ("v", 47),
        Key::KeyB => ("b", 48),
        Key::KeyN => ("n", 49),
        Key::KeyM => ("m", 50),
        Key::Comma => (",", 51),
        Key::Dot => (".", 52),
        Key::Slash => ("/", 53),
        Key::ShiftRight => ("right shift", 54),
        Key::KpMultiply => ("*", 55),
        Key::Alt => ("alt", 56),
        Key::Space => ("space", 57),
        Key::CapsLock => ("caps lock", 58),
        Key::F1 => ("f1", 59),
        Key::F2 => ("f2", 60),
        Key::F3 => ("f3", 61),
        Key::F4 => ("f4", 62),
        Key::F5 => ("f5", 63),
        Key::F6 => ("f6", 64),
        Key::F7 => ("f7", 65),
        Key::F8 => ("f8", 66),
        Key::F9 => ("f9", 67),
        Key::F10 => ("f10", 68),
        Key::NumLock => ("num lock", 69),
        Key::ScrollLock => ("scroll lock", 70),
        Key::Kp7 => ("numpad 7", 71),
        Key::Kp8 => ("numpad 8", 72),
        Key::Kp9 => ("numpad 9", 73),
        Key::KpMinus => ("numpad -", 74),
        Key::Kp4 => ("numpad 4", 75),
        Key::Kp5 => ("numpad 5", 76),
        Key::Kp6 => ("numpad 6", 77),
        Key::KpPlus => ("numpad +", 78),
        Key::Kp1 => ("numpad 1", 79),
        Key::Kp2 => ("numpad 2", 80),
        Key::Kp3 => ("numpad 3", 81),
        Key::Kp0 => ("numpad 0", 82),
        Key::KpDelete => ("numpad .", 83),
        Key::IntlBackslash => ("<", 86),
        Key::F11 => ("f11", 87),
        Key::F12 => ("f12", 88),
        // E0-prefixed keys
        Key::KpReturn => ("enter", 28),
        Key::ControlRight => ("right ctrl", 29),
        Key::KpDivide => ("/", 53),
        Key::PrintScreen => ("print screen", 55),
        Key::AltGr => ("alt gr", 56),
        Key::Pause => ("pause", 69),
        Key::Home => ("home", 71),
        Key::UpArrow => ("up", 72),
        Key::PageUp => ("page up", 73),
        Key::LeftArrow => ("left", 75),
        Key::RightArrow => ("right", 77),
        Key::End => ("end", 79),
        Key::DownArrow => ("down", 80),
        Key::PageDown => ("page down", 81),
        Key::Insert => ("insert", 82),
        Key::Delete => ("delete", 83),
        Key::MetaLeft => ("left windows", 91),
        Key::MetaRight => ("right windows", 92),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(KeyEvent::from_key(Key::UpArrow), KeyEvent::new("up", 72));
        assert_eq!(KeyEvent::from_key(Key::DownArrow), KeyEvent::new("down", 80));
        assert_eq!(KeyEvent::from_key(Key::LeftArrow), KeyEvent::new("left", 75));
        assert_eq!(KeyEvent::from_key(Key::RightArrow), KeyEvent::new("right", 77));
    }

    #[test]
    fn test_numpad_zero_and_insert_share_scan_code() {
        let numpad = KeyEvent::from_key(Key::Kp0);
        let insert = KeyEvent::from_key(Key::Insert);
        assert_eq!(numpad.name, "numpad 0");
        assert_eq!(insert.name, "insert");
        assert_eq!(numpad.scan_code, 82);
        assert_eq!(insert.scan_code, 82);
    }

    #[test]
    fn test_letter_key() {
        assert_eq!(KeyEvent::from_key(Key::KeyA), KeyEvent::new("a", 30));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_unknown_key_uses_evdev_code() {
        // X keycode 90 is KP_Insert, evdev KEY_KP0
        let event = KeyEvent::from_key(Key::Unknown(90));
        assert_eq!(event.name, "unknown");
        assert_eq!(event.scan_code, 82);
    }
}
