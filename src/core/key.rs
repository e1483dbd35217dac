//! # Key Combinations
//!
//! A host-independent description of one key press: which modifiers were
//! held and which key went down. The string form is the normalized
//! `Ctrl+Alt+Shift+Meta+Key` spelling, modifiers in that fixed order:
//!
//! ```text
//! Enter            plain key
//! Ctrl+Enter       one modifier
//! Ctrl+Shift+z     several modifiers, character key
//! Ctrl++           the '+' key itself
//! ```
//!
//! Named keys use DOM-style names (`ArrowUp`, `Backspace`, ...). Parsing is
//! case-insensitive for modifiers and named keys; single characters are kept
//! as typed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Backspace,
    Delete,
    Home,
    End,
    Tab,
    Escape,
    F(u8),
    Char(char),
}

impl Key {
    fn parse(token: &str) -> Option<Key> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }

        let lower = token.to_ascii_lowercase();
        let key = match lower.as_str() {
            "arrowup" | "up" => Key::ArrowUp,
            "arrowdown" | "down" => Key::ArrowDown,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            "enter" | "return" => Key::Enter,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "home" => Key::Home,
            "end" => Key::End,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "space" => Key::Char(' '),
            f if f.starts_with('f') => {
                let n: u8 = f[1..].parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                Key::F(n)
            }
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("ArrowUp"),
            Key::ArrowDown => f.write_str("ArrowDown"),
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Enter => f.write_str("Enter"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::Tab => f.write_str("Tab"),
            Key::Escape => f.write_str("Escape"),
            Key::F(n) => write!(f, "F{n}"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Ctrl, Alt or Meta held. Shift alone still counts as typing.
    pub fn has_command(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyComboError {
    #[error("empty key combination")]
    Empty,
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key,
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// The character this combo types, if it is plain typing.
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.has_command() => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (held, name) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.meta, "Meta"),
        ] {
            if held {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyCombo {
    type Err = KeyComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyComboError::Empty);
        }

        // The '+' key itself: "+", "Ctrl++"
        let (prefix, key_token) = if s == "+" {
            ("", "+")
        } else if let Some(prefix) = s.strip_suffix("++") {
            (prefix, "+")
        } else {
            match s.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", s),
            }
        };

        if key_token.is_empty() {
            return Err(KeyComboError::Empty);
        }
        let key =
            Key::parse(key_token).ok_or_else(|| KeyComboError::UnknownKey(key_token.to_string()))?;

        let mut combo = KeyCombo::new(key);
        for token in prefix.split('+').filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => combo.modifiers.ctrl = true,
                "alt" | "option" => combo.modifiers.alt = true,
                "shift" => combo.modifiers.shift = true,
                "meta" | "cmd" | "super" => combo.modifiers.meta = true,
                _ => return Err(KeyComboError::UnknownModifier(token.to_string())),
            }
        }
        Ok(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Enter", KeyCombo::new(Key::Enter))]
    #[case("Ctrl+Enter", KeyCombo::new(Key::Enter).ctrl())]
    #[case("Meta+Enter", KeyCombo::new(Key::Enter).meta())]
    #[case("Shift+Enter", KeyCombo::new(Key::Enter).shift())]
    #[case("Ctrl+Shift+z", KeyCombo::char('z').ctrl().shift())]
    #[case("ctrl+arrowup", KeyCombo::new(Key::ArrowUp).ctrl())]
    #[case("Ctrl++", KeyCombo::char('+').ctrl())]
    #[case("+", KeyCombo::char('+'))]
    #[case("F5", KeyCombo::new(Key::F(5)))]
    #[case("Space", KeyCombo::char(' '))]
    fn test_parse(#[case] input: &str, #[case] expected: KeyCombo) {
        assert_eq!(input.parse::<KeyCombo>(), Ok(expected));
    }

    #[rstest]
    #[case("", KeyComboError::Empty)]
    #[case("Ctrl+", KeyComboError::Empty)]
    #[case("Hyper+a", KeyComboError::UnknownModifier("Hyper".into()))]
    #[case("Ctrl+Launch", KeyComboError::UnknownKey("Launch".into()))]
    #[case("F13", KeyComboError::UnknownKey("F13".into()))]
    fn test_parse_errors(#[case] input: &str, #[case] expected: KeyComboError) {
        assert_eq!(input.parse::<KeyCombo>(), Err(expected));
    }

    #[test]
    fn test_display_uses_fixed_modifier_order() {
        let combo = KeyCombo::char('z').meta().shift().ctrl().alt();
        assert_eq!(combo.to_string(), "Ctrl+Alt+Shift+Meta+z");
        assert_eq!(KeyCombo::new(Key::ArrowLeft).to_string(), "ArrowLeft");
    }

    #[test]
    fn test_display_parses_back() {
        let combo = KeyCombo::new(Key::Backspace).alt();
        assert_eq!(combo.to_string().parse::<KeyCombo>(), Ok(combo));
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(KeyCombo::char('a').typed_char(), Some('a'));
        assert_eq!(KeyCombo::char('A').shift().typed_char(), Some('A'));
        assert_eq!(KeyCombo::char('a').ctrl().typed_char(), None);
        assert_eq!(KeyCombo::new(Key::Enter).typed_char(), None);
    }
}
