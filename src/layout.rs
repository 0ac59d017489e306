//! Screen geometry for the grid, keyboard and reset button.
//! Pure functions of the configuration so hit-testing works without a window.

use crate::config::{
    BANNER_HEIGHT, BANNER_TOP, CONTROL_KEY_WIDTH, GRID_TOP, KEY_GAP, KEY_HEIGHT, KEY_WIDTH,
    KEYBOARD_TOP, MAX_GUESSES, RESET_BUTTON_HEIGHT, RESET_BUTTON_WIDTH, TILE_GAP, TILE_SIZE,
    WINDOW_WIDTH, WORD_LENGTH,
};
use crate::keyboard::{self, Key};
use macroquad::math::{Rect, Vec2};

fn centered_x(total_width: f32) -> f32 {
    (WINDOW_WIDTH as f32 - total_width) / 2.0
}

/// Rectangle of the tile at (`row`, `col`)
pub fn tile_rect(row: usize, col: usize) -> Rect {
    let grid_width = WORD_LENGTH as f32 * TILE_SIZE + (WORD_LENGTH - 1) as f32 * TILE_GAP;
    Rect::new(
        centered_x(grid_width) + col as f32 * (TILE_SIZE + TILE_GAP),
        GRID_TOP + row as f32 * (TILE_SIZE + TILE_GAP),
        TILE_SIZE,
        TILE_SIZE,
    )
}

fn key_width(key: &Key) -> f32 {
    if key.is_control() { CONTROL_KEY_WIDTH } else { KEY_WIDTH }
}

/// Every on-screen key with its rectangle, rows centred horizontally
pub fn key_rects() -> Vec<(Key, Rect)> {
    let mut rects = Vec::new();
    for (row_index, row) in keyboard::layout().iter().enumerate() {
        let row_width: f32 =
            row.iter().map(key_width).sum::<f32>() + (row.len() - 1) as f32 * KEY_GAP;
        let y = KEYBOARD_TOP + row_index as f32 * (KEY_HEIGHT + KEY_GAP);
        let mut x = centered_x(row_width);
        for key in row {
            let w = key_width(key);
            rects.push((*key, Rect::new(x, y, w, KEY_HEIGHT)));
            x += w + KEY_GAP;
        }
    }
    rects
}

/// The key under `point`, if any
pub fn key_at(point: Vec2) -> Option<Key> {
    key_rects()
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(key, _)| key)
}

/// Banner shown once the game is over
pub fn banner_rect() -> Rect {
    let width = WINDOW_WIDTH as f32 - 40.0;
    Rect::new(centered_x(width), BANNER_TOP, width, BANNER_HEIGHT)
}

/// "Play again" button, below the banner
pub fn reset_button_rect() -> Rect {
    Rect::new(
        centered_x(RESET_BUTTON_WIDTH),
        BANNER_TOP + BANNER_HEIGHT + 6.0,
        RESET_BUTTON_WIDTH,
        RESET_BUTTON_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_grid_is_centered() {
        let first = tile_rect(0, 0);
        let last = tile_rect(0, WORD_LENGTH - 1);
        let left_margin = first.x;
        let right_margin = WINDOW_WIDTH as f32 - (last.x + last.w);
        assert_approx_eq!(left_margin, right_margin);
    }

    #[test]
    fn test_tiles_do_not_overlap_banner() {
        let bottom = tile_rect(MAX_GUESSES - 1, 0);
        assert!(bottom.y + bottom.h <= banner_rect().y);
        let button = reset_button_rect();
        assert!(button.y + button.h <= KEYBOARD_TOP);
    }

    #[test]
    fn test_every_key_is_hittable() {
        let rects = key_rects();
        assert_eq!(rects.len(), 28);
        for (key, rect) in &rects {
            assert_eq!(key_at(rect.center()), Some(*key));
        }
    }

    #[test]
    fn test_keys_fit_in_window() {
        for (_, rect) in key_rects() {
            assert!(rect.x >= 0.0);
            assert!(rect.x + rect.w <= WINDOW_WIDTH as f32);
        }
    }

    #[test]
    fn test_gap_between_keys_is_not_a_key() {
        let rects = key_rects();
        let (_, q) = rects[0];
        let gap_point = Vec2::new(q.x + q.w + KEY_GAP / 2.0, q.y + q.h / 2.0);
        assert_eq!(key_at(gap_point), None);
        assert_eq!(key_at(Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_control_keys_are_wider() {
        let rects = key_rects();
        let (_, enter) = rects.iter().find(|(k, _)| *k == Key::Enter).copied().unwrap();
        let (_, z) = rects.iter().find(|(k, _)| *k == Key::Letter('Z')).copied().unwrap();
        assert_approx_eq!(enter.w, CONTROL_KEY_WIDTH);
        assert_approx_eq!(z.w, KEY_WIDTH);
    }
}
