use crate::config::KEYBOARD_ROWS;
use crate::feedback::{LetterStatus, classify};
use std::collections::BTreeMap;

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name as used by the layout ("A".."Z", "ENTER", "BACKSPACE").
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ENTER" => Some(Key::Enter),
            "BACKSPACE" => Some(Key::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => Some(Key::Letter(c)),
                    _ => None,
                }
            }
        }
    }

    /// Text printed on the key cap
    pub fn label(&self) -> String {
        match self {
            Key::Letter(c) => c.to_string(),
            Key::Enter => "ENTER".to_string(),
            Key::Backspace => "\u{232B}".to_string(),
        }
    }

    pub fn is_control(&self) -> bool {
        !matches!(self, Key::Letter(_))
    }
}

/// The keyboard layout as rows of keys
pub fn layout() -> Vec<Vec<Key>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| row.iter().filter_map(|name| Key::from_name(name)).collect())
        .collect()
}

/// Best feedback observed so far for each letter across the whole game.
/// Statuses only ever move up: Absent -> Present -> Correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: BTreeMap<char, LetterStatus>,
}

impl KeyboardStatus {
    pub fn new() -> Self {
        Default::default()
    }

    /// Fold a submitted word into the map
    pub fn update(&mut self, target: &str, word: &str) {
        for (i, letter) in word.chars().enumerate() {
            let status = classify(target, letter, i);
            self.letters
                .entry(letter)
                .and_modify(|existing| *existing = (*existing).max(status))
                .or_insert(status);
        }
    }

    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter).copied()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
