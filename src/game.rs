use crate::config::{MAX_GUESSES, TARGET_WORD, WORD_LENGTH};
use crate::error::GuessError;
use crate::feedback::{LetterStatus, classify};
use crate::keyboard::{self, Key, KeyboardStatus};
use crate::{debug_game, debug_input};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// The three action classes the state machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Enter,
    Backspace,
}

/// What an accepted action did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Typed,
    Erased,
    /// Wrong guess recorded, moved to the next row
    Advanced,
    Won,
    Lost,
    /// No-op: finished game, full or empty buffer, non-letter key
    Ignored,
}

/// Everything the game tracks. One value per game; the views only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub guesses: [Option<String>; MAX_GUESSES],
    pub current_guess: String,
    pub current_row: usize,
    pub status: GameStatus,
    pub keyboard: KeyboardStatus,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            guesses: Default::default(),
            current_guess: String::with_capacity(WORD_LENGTH),
            current_row: 0,
            status: GameStatus::Playing,
            keyboard: KeyboardStatus::new(),
        }
    }
}

/// One tile of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    /// Only set for submitted rows
    pub status: Option<LetterStatus>,
}

/// One key of the on-screen keyboard, ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyView {
    pub key: Key,
    pub label: String,
    /// Aggregated status; always `None` for ENTER/BACKSPACE
    pub status: Option<LetterStatus>,
}

/// The Game struct owns the state and applies actions to it one at a time
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new() -> Self {
        info!("New game: {} letters, {} guesses.", WORD_LENGTH, MAX_GUESSES);
        Default::default()
    }

    /// Current state snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Apply a key press by name ("A".."Z", "ENTER", "BACKSPACE").
    /// Unknown names are ignored.
    pub fn press(&mut self, name: &str) -> Result<Outcome, GuessError> {
        match Action::from_key_name(name) {
            Some(action) => self.dispatch(action),
            None => {
                debug_input!("Ignoring unknown key {:?}", name);
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Apply a single action. Runs to completion; a rejected submission returns
    /// an error and leaves the state exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, GuessError> {
        if self.state.status != GameStatus::Playing {
            debug_game!(self.state.current_row, "Ignoring {:?}, game is over", action);
            return Ok(Outcome::Ignored);
        }

        let outcome = match action {
            Action::Letter(letter) => self.type_letter(letter),
            Action::Backspace => self.erase_letter(),
            Action::Enter => self.submit()?,
        };
        debug_game!(self.state.current_row, "{:?} -> {:?}", action, outcome);
        Ok(outcome)
    }

    /// Restore the initial state. Available in any status.
    pub fn reset(&mut self) {
        info!("Resetting game.");
        self.state = GameState::default();
    }

    fn type_letter(&mut self, letter: char) -> Outcome {
        if !letter.is_ascii_uppercase() || self.state.current_guess.len() >= WORD_LENGTH {
            return Outcome::Ignored;
        }
        self.state.current_guess.push(letter);
        Outcome::Typed
    }

    fn erase_letter(&mut self) -> Outcome {
        match self.state.current_guess.pop() {
            Some(_) => Outcome::Erased,
            None => Outcome::Ignored,
        }
    }

    fn submit(&mut self) -> Result<Outcome, GuessError> {
        let actual = self.state.current_guess.len();
        if actual != WORD_LENGTH {
            warn!("Rejected guess {:?}: {} of {} letters.", self.state.current_guess, actual, WORD_LENGTH);
            return Err(GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let row = self.state.current_row;
        let guess = self.state.current_guess.clone();
        self.state.keyboard.update(TARGET_WORD, &guess);
        let won = guess == TARGET_WORD;
        self.state.guesses[row] = Some(guess);

        if won {
            info!("Solved on guess {} of {}.", row + 1, MAX_GUESSES);
            self.state.status = GameStatus::Won;
            Ok(Outcome::Won)
        } else if row == MAX_GUESSES - 1 {
            info!("Out of guesses, the word was {}.", TARGET_WORD);
            self.state.status = GameStatus::Lost;
            Ok(Outcome::Lost)
        } else {
            self.state.current_row += 1;
            self.state.current_guess.clear();
            Ok(Outcome::Advanced)
        }
    }

    /// Letters and feedback for every tile, row by row
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        let state = &self.state;
        (0..MAX_GUESSES)
            .map(|row| match &state.guesses[row] {
                Some(word) => word
                    .chars()
                    .enumerate()
                    .map(|(i, letter)| Cell {
                        letter: Some(letter),
                        status: Some(classify(TARGET_WORD, letter, i)),
                    })
                    .collect(),
                None if row == state.current_row => {
                    let mut letters = state.current_guess.chars();
                    (0..WORD_LENGTH)
                        .map(|_| Cell {
                            letter: letters.next(),
                            status: None,
                        })
                        .collect()
                }
                None => vec![Cell::default(); WORD_LENGTH],
            })
            .collect()
    }

    /// Keys in layout order with their labels and aggregated statuses
    pub fn keyboard(&self) -> Vec<Vec<KeyView>> {
        keyboard::layout()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|key| KeyView {
                        key,
                        label: key.label(),
                        status: match key {
                            Key::Letter(c) => self.state.keyboard.get(c),
                            _ => None,
                        },
                    })
                    .collect()
            })
            .collect()
    }
}
