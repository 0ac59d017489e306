use crate::debug_input;
use crate::game::Action;
use crate::keyboard::Key;
use macroquad::prelude::{KeyCode, get_char_pressed, is_key_pressed};
use std::collections::VecDeque;

/// A raw physical key event, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKey {
    Char(char),
    Enter,
    Backspace,
    Other,
}

impl Action {
    /// Map an on-screen key name ("A".."Z", "ENTER", "BACKSPACE")
    pub fn from_key_name(name: &str) -> Option<Action> {
        Key::from_name(name).map(Action::from)
    }

    /// Map a physical key event. Letters are upper-cased; anything outside
    /// A-Z, Enter and Backspace is dropped.
    pub fn from_raw(raw: RawKey) -> Option<Action> {
        match raw {
            RawKey::Enter => Some(Action::Enter),
            RawKey::Backspace => Some(Action::Backspace),
            RawKey::Char(c) => {
                let upper = c.to_ascii_uppercase();
                upper.is_ascii_uppercase().then_some(Action::Letter(upper))
            }
            RawKey::Other => None,
        }
    }
}

impl From<Key> for Action {
    fn from(key: Key) -> Self {
        match key {
            Key::Letter(c) => Action::Letter(c),
            Key::Enter => Action::Enter,
            Key::Backspace => Action::Backspace,
        }
    }
}

/// Anything that yields physical key events in arrival order
pub trait KeySource {
    /// Pull in whatever arrived since the last call. Called once per frame.
    fn refresh(&mut self) {}

    fn next_key(&mut self) -> Option<RawKey>;

    /// Drop everything queued
    fn flush(&mut self) {
        while self.next_key().is_some() {}
    }
}

/// Polls macroquad's per-frame keyboard state
#[derive(Debug, Default)]
pub struct MacroquadKeys {
    pending: VecDeque<RawKey>,
}

impl MacroquadKeys {
    pub fn new() -> Self {
        Default::default()
    }
}

impl KeySource for MacroquadKeys {
    fn refresh(&mut self) {
        // Control keys go through key codes; the char queue may also carry
        // '\r' or '\u{8}' for them, which are reported as `Other`.
        while let Some(c) = get_char_pressed() {
            self.pending.push_back(if c.is_control() {
                RawKey::Other
            } else {
                RawKey::Char(c)
            });
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.pending.push_back(RawKey::Backspace);
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            self.pending.push_back(RawKey::Enter);
        }
    }

    fn next_key(&mut self) -> Option<RawKey> {
        self.pending.pop_front()
    }

    fn flush(&mut self) {
        self.pending.clear();
        while get_char_pressed().is_some() {}
    }
}

/// Scoped attachment to a key source. Stale events queued before attaching
/// are discarded, and the source is flushed again on drop. The listener holds
/// the source exclusively, so a second listener cannot be attached while this
/// one is alive. It holds no game state: callers dispatch the actions it
/// yields into whatever game is current.
pub struct KeyboardListener<'a, S: KeySource> {
    source: &'a mut S,
}

impl<'a, S: KeySource> KeyboardListener<'a, S> {
    pub fn attach(source: &'a mut S) -> Self {
        source.flush();
        debug_input!("Keyboard listener attached");
        KeyboardListener { source }
    }

    /// Normalized actions that arrived since the last call, in order
    pub fn actions(&mut self) -> Vec<Action> {
        self.source.refresh();
        std::iter::from_fn(|| self.poll()).collect()
    }

    fn poll(&mut self) -> Option<Action> {
        loop {
            let raw = self.source.next_key()?;
            match Action::from_raw(raw) {
                Some(action) => return Some(action),
                None => debug_input!("Ignoring physical key {:?}", raw),
            }
        }
    }
}

impl<S: KeySource> Drop for KeyboardListener<'_, S> {
    fn drop(&mut self) {
        self.source.flush();
        debug_input!("Keyboard listener detached");
    }
}
