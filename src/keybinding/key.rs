use std::fmt;

/// One unit of keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Backspace,
    Tab,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Unknown,
}

impl Key {
    /// Decodes a single byte as delivered by a terminal in raw mode.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x1b => Key::Escape,
            0x7f | 0x08 => Key::Backspace,
            b'\r' | b'\n' => Key::Enter,
            b'\t' => Key::Tab,
            0x01..=0x1a => Key::Ctrl((b'a' + byte - 1) as char),
            0x20..=0x7e => Key::Char(byte as char),
            _ => Key::Unknown,
        }
    }

    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_control())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "C-{}", c),
            Key::Backspace => write!(f, "<backspace>"),
            Key::Tab => write!(f, "<tab>"),
            Key::Enter => write!(f, "<return>"),
            Key::Escape => write!(f, "<escape>"),
            Key::Up => write!(f, "<up>"),
            Key::Down => write!(f, "<down>"),
            Key::Left => write!(f, "<left>"),
            Key::Right => write!(f, "<right>"),
            Key::Unknown => write!(f, "<unknown>"),
        }
    }
}

impl From<crossterm::event::KeyEvent> for Key {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Ctrl(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_from_byte() {
        assert_eq!(Key::from_byte(0x1b), Key::Escape);
        assert_eq!(Key::from_byte(127), Key::Backspace);
        assert_eq!(Key::from_byte(b'\r'), Key::Enter);
        assert_eq!(Key::from_byte(b'x'), Key::Char('x'));
        assert_eq!(Key::from_byte(0x11), Key::Ctrl('q'));
        assert_eq!(Key::from_byte(0xc3), Key::Unknown);
    }

    #[test]
    fn test_from_crossterm() {
        let plain = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(Key::from(plain), Key::Char('j'));

        let shifted = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert_eq!(Key::from(shifted), Key::Char('J'));

        let ctrl = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        assert_eq!(Key::from(ctrl), Key::Ctrl('c'));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(Key::from(esc), Key::Escape);
    }

    #[test]
    fn test_is_printable() {
        assert!(Key::Char('a').is_printable());
        assert!(Key::Char('é').is_printable());
        assert!(!Key::Ctrl('a').is_printable());
        assert!(!Key::Backspace.is_printable());
        assert!(!Key::Tab.is_printable());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Ctrl('x').to_string(), "C-x");
        assert_eq!(Key::Char('a').to_string(), "a");
        assert_eq!(Key::Enter.to_string(), "<return>");
    }
}
