//! Configuration constants for the word guessing game.

// Game rules
pub const TARGET_WORD: &str = "MALLORCA";
pub const WORD_LENGTH: usize = 8;
pub const MAX_GUESSES: usize = 6;

const _: () = assert!(TARGET_WORD.len() == WORD_LENGTH);

// On-screen keyboard, top to bottom. "ENTER" and "BACKSPACE" are control keys.
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

// Rendering configuration
pub const WINDOW_WIDTH: i32 = 520;
pub const WINDOW_HEIGHT: i32 = 790;

pub const TILE_SIZE: f32 = 52.0;
pub const TILE_GAP: f32 = 6.0;
pub const GRID_TOP: f32 = 150.0;

pub const KEY_WIDTH: f32 = 40.0;
pub const CONTROL_KEY_WIDTH: f32 = 64.0;
pub const KEY_HEIGHT: f32 = 46.0;
pub const KEY_GAP: f32 = 5.0;
pub const KEYBOARD_TOP: f32 = 620.0;

pub const BANNER_TOP: f32 = GRID_TOP + MAX_GUESSES as f32 * (TILE_SIZE + TILE_GAP) + 4.0;
pub const BANNER_HEIGHT: f32 = 64.0;
pub const RESET_BUTTON_WIDTH: f32 = 160.0;
pub const RESET_BUTTON_HEIGHT: f32 = 34.0;
