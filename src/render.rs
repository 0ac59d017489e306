use crate::config::{MAX_GUESSES, TARGET_WORD, WINDOW_WIDTH, WORD_LENGTH};
use crate::debug_render;
use crate::feedback::LetterStatus;
use crate::game::{Cell, Game, GameStatus, KeyView};
use crate::keyboard::Key;
use crate::layout;
use macroquad::prelude::*;

const TITLE: &str = "Adivina el destino...";
const WON_TITLE: &str = "¡Felicidades!, nos vamos a..";
const WON_DETAIL: &str = "¡Prepara la mochila para este viernes!";
const LOST_TITLE: &str = "¡Juego terminado!";
const LOST_DETAIL: &str = "El destino es:";
const RESET_LABEL: &str = "Jugar de nuevo";

// Palette
const BACKGROUND: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const TITLE_COLOR: Color = Color::new(0.15, 0.39, 0.92, 1.0);
const MUTED_TEXT: Color = Color::new(0.42, 0.45, 0.50, 1.0);
const CORRECT_COLOR: Color = Color::new(0.13, 0.77, 0.37, 1.0);
const PRESENT_COLOR: Color = Color::new(0.92, 0.70, 0.03, 1.0);
const ABSENT_COLOR: Color = Color::new(0.42, 0.45, 0.50, 1.0);
const FILLED_BORDER: Color = Color::new(0.42, 0.45, 0.50, 1.0);
const EMPTY_BORDER: Color = Color::new(0.82, 0.84, 0.86, 1.0);
const KEY_DEFAULT: Color = Color::new(0.90, 0.91, 0.92, 1.0);
const KEY_HOVER: Color = Color::new(0.82, 0.84, 0.86, 1.0);
const KEY_CONTROL: Color = Color::new(0.61, 0.64, 0.69, 1.0);
const WON_BACKGROUND: Color = Color::new(0.86, 0.99, 0.91, 1.0);
const WON_TEXT: Color = Color::new(0.08, 0.50, 0.24, 1.0);
const LOST_BACKGROUND: Color = Color::new(1.0, 0.89, 0.89, 1.0);
const LOST_TEXT: Color = Color::new(0.73, 0.11, 0.11, 1.0);
const BUTTON_COLOR: Color = Color::new(0.23, 0.51, 0.96, 1.0);
const NOTICE_BACKGROUND: Color = Color::new(0.07, 0.09, 0.15, 0.85);

/// Fill colour for a feedback status
pub fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => CORRECT_COLOR,
        LetterStatus::Present => PRESENT_COLOR,
        LetterStatus::Absent => ABSENT_COLOR,
    }
}

// Handles drawing a game snapshot using macroquad
#[derive(Default)]
pub struct Renderer {
    ui_font: Option<Font>,
}

impl Renderer {
    pub fn new() -> Self {
        Default::default()
    }

    // Load a custom TTF font; the built-in font lacks accented glyphs
    pub async fn load_ui_font(&mut self, path: &str) {
        match load_ttf_font(path).await {
            Ok(font) => {
                debug_render!("Loaded UI font {}", path);
                self.ui_font = Some(font);
            }
            Err(e) => log::error!("Failed to load UI font {}: {}", path, e),
        }
    }

    /// Draw one frame. `notice` is the pending validation message, `hover` the
    /// key under the mouse.
    pub fn draw_frame(&self, game: &Game, notice: Option<&str>, hover: Option<Key>) {
        clear_background(BACKGROUND);
        self.draw_header();
        self.draw_grid(&game.grid());

        match game.status() {
            GameStatus::Playing => {}
            status => {
                self.draw_banner(status);
                self.draw_reset_button();
            }
        }

        self.draw_keyboard(&game.keyboard(), hover);

        if let Some(msg) = notice {
            self.draw_notice(msg);
        }
    }

    fn params(&self, font_size: u16, color: Color) -> TextParams<'_> {
        TextParams {
            font: self.ui_font.as_ref(),
            font_size,
            color,
            ..Default::default()
        }
    }

    fn draw_centered(&self, text: &str, center_x: f32, baseline: f32, font_size: u16, color: Color) {
        let dims = measure_text(text, self.ui_font.as_ref(), font_size, 1.0);
        draw_text_ex(text, center_x - dims.width / 2.0, baseline, self.params(font_size, color));
    }

    fn draw_header(&self) {
        let center = WINDOW_WIDTH as f32 / 2.0;
        self.draw_centered(TITLE, center, 48.0, 34, TITLE_COLOR);
        let subtitle = format!("¡Adivina la palabra en {} intentos!", MAX_GUESSES);
        self.draw_centered(&subtitle, center, 80.0, 18, MUTED_TEXT);

        // Legend: swatch + label for each status
        let legend = [
            (CORRECT_COLOR, "Correcto"),
            (PRESENT_COLOR, "Presente"),
            (ABSENT_COLOR, "Ausente"),
        ];
        let swatch = 14.0;
        let spacing = 24.0;
        let widths: Vec<f32> = legend
            .iter()
            .map(|(_, label)| swatch + 6.0 + measure_text(label, self.ui_font.as_ref(), 16, 1.0).width)
            .collect();
        let total = widths.iter().sum::<f32>() + spacing * (legend.len() - 1) as f32;
        let mut x = center - total / 2.0;
        let y = 108.0;
        for ((color, label), width) in legend.iter().zip(widths) {
            draw_rectangle(x, y, swatch, swatch, *color);
            draw_text_ex(label, x + swatch + 6.0, y + swatch - 2.0, self.params(16, MUTED_TEXT));
            x += width + spacing;
        }
    }

    fn draw_grid(&self, grid: &[Vec<Cell>]) {
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate().take(WORD_LENGTH) {
                let rect = layout::tile_rect(row, col);
                let (fill, border, text_color) = match (cell.status, cell.letter) {
                    (Some(status), _) => (status_color(status), status_color(status), WHITE),
                    (None, Some(_)) => (BACKGROUND, FILLED_BORDER, BLACK),
                    (None, None) => (BACKGROUND, EMPTY_BORDER, BLACK),
                };
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, border);
                if let Some(letter) = cell.letter {
                    let text = letter.to_string();
                    let center = rect.center();
                    self.draw_centered(&text, center.x, center.y + 10.0, 28, text_color);
                }
            }
        }
    }

    fn draw_banner(&self, status: GameStatus) {
        let rect = layout::banner_rect();
        let center = rect.center().x;
        let (background, color, title, detail) = match status {
            GameStatus::Won => (
                WON_BACKGROUND,
                WON_TEXT,
                WON_TITLE,
                format!("{} {}", TARGET_WORD, WON_DETAIL),
            ),
            _ => (
                LOST_BACKGROUND,
                LOST_TEXT,
                LOST_TITLE,
                format!("{} {}", LOST_DETAIL, TARGET_WORD),
            ),
        };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, background);
        self.draw_centered(title, center, rect.y + 28.0, 24, color);
        self.draw_centered(&detail, center, rect.y + 52.0, 16, color);
    }

    fn draw_reset_button(&self) {
        let rect = layout::reset_button_rect();
        let hovered = rect.contains(mouse_position().into());
        let color = if hovered { TITLE_COLOR } else { BUTTON_COLOR };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        let center = rect.center();
        self.draw_centered(RESET_LABEL, center.x, center.y + 6.0, 18, WHITE);
    }

    fn draw_keyboard(&self, rows: &[Vec<KeyView>], hover: Option<Key>) {
        let rects = layout::key_rects();
        for view in rows.iter().flatten() {
            let Some((_, rect)) = rects.iter().find(|(key, _)| *key == view.key) else {
                continue;
            };
            let (fill, text_color) = match (view.key.is_control(), view.status) {
                (true, _) => (KEY_CONTROL, WHITE),
                (false, Some(status)) => (status_color(status), WHITE),
                (false, None) if hover == Some(view.key) => (KEY_HOVER, BLACK),
                (false, None) => (KEY_DEFAULT, BLACK),
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);

            // The built-in font has no backspace glyph
            let label = match (view.key, &self.ui_font) {
                (Key::Backspace, None) => "<-",
                _ => view.label.as_str(),
            };
            let center = rect.center();
            let size = if view.key.is_control() { 14 } else { 20 };
            self.draw_centered(label, center.x, center.y + 6.0, size, text_color);
        }
    }

    fn draw_notice(&self, msg: &str) {
        let font_size = 20;
        let dims = measure_text(msg, self.ui_font.as_ref(), font_size, 1.0);
        let width = dims.width + 32.0;
        let height = 40.0;
        let x = (WINDOW_WIDTH as f32 - width) / 2.0;
        let y = layout::banner_rect().y + 12.0;
        draw_rectangle(x, y, width, height, NOTICE_BACKGROUND);
        self.draw_centered(msg, x + width / 2.0, y + 27.0, font_size, WHITE);
    }

    pub fn window_should_close() -> bool {
        is_key_down(KeyCode::Escape) || is_quit_requested()
    }

    pub fn mouse_clicked() -> Option<Vec2> {
        is_mouse_button_pressed(MouseButton::Left).then(|| mouse_position().into())
    }

    pub fn cursor_position() -> Vec2 {
        mouse_position().into()
    }
}
