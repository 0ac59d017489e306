// Game error types: rejected submissions

use thiserror::Error;

/// Guess validation errors. Raised synchronously by the action that caused them;
/// the game state is left untouched.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum GuessError {
    #[error("La palabra debe tener {expected} letras")]
    WrongLength { expected: usize, actual: usize },
}
