use crate::error::GuessError;
use crate::game::{Action, Game, GameStatus, Outcome};
use crate::input::{KeyboardListener, MacroquadKeys};
use crate::layout;
use crate::render::Renderer;
use log::info;
use macroquad::prelude::{Vec2, next_frame};

/// Ties a game to its views: applies input, tracks the notice, draws.
#[derive(Debug, Default)]
pub struct App {
    pub game: Game,
    notice: Option<String>,
}

impl App {
    pub fn new() -> Self {
        App {
            game: Game::new(),
            notice: None,
        }
    }

    /// Validation message awaiting display
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Apply one action and keep the notice in sync with the result
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GuessError> {
        let result = self.game.dispatch(action);
        match &result {
            Err(e) => self.notice = Some(e.to_string()),
            Ok(Outcome::Ignored) => {}
            Ok(_) => self.notice = None,
        }
        result
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.notice = None;
    }

    /// Handle a left click at `point`: a virtual key or the reset button
    pub fn click(&mut self, point: Vec2) {
        if self.game.status() != GameStatus::Playing
            && layout::reset_button_rect().contains(point)
        {
            self.reset();
            return;
        }
        if let Some(key) = layout::key_at(point) {
            // Rejections are surfaced through the notice
            let _ = self.apply(Action::from(key));
        }
    }

    /// Run the frame loop until the window closes. The physical keyboard is
    /// attached for exactly the duration of this call.
    pub async fn run(&mut self, renderer: &Renderer) {
        info!("Starting main loop...");
        let mut keys = MacroquadKeys::new();
        let mut listener = KeyboardListener::attach(&mut keys);

        while !Renderer::window_should_close() {
            for action in listener.actions() {
                let _ = self.apply(action);
            }
            if let Some(point) = Renderer::mouse_clicked() {
                self.click(point);
            }

            let hover = layout::key_at(Renderer::cursor_position());
            renderer.draw_frame(&self.game, self.notice(), hover);
            next_frame().await;
        }
        info!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_GUESSES, WORD_LENGTH};
    use crate::keyboard::Key;

    fn center_of(key: Key) -> Vec2 {
        layout::key_rects()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, rect)| rect.center())
            .unwrap()
    }

    fn click_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.click(center_of(Key::Letter(c)));
        }
        app.click(center_of(Key::Enter));
    }

    #[test]
    fn test_short_guess_sets_notice_until_next_action() {
        let mut app = App::new();
        app.apply(Action::Letter('M')).unwrap();
        assert!(app.apply(Action::Enter).is_err());
        let expected = format!("La palabra debe tener {} letras", WORD_LENGTH);
        assert_eq!(app.notice(), Some(expected.as_str()));

        // Ignored actions keep it, accepted ones clear it
        app.apply(Action::Letter('1')).unwrap();
        assert!(app.notice().is_some());
        app.apply(Action::Backspace).unwrap();
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_clicking_keys_plays_the_game() {
        let mut app = App::new();
        click_word(&mut app, "MALLORCO");
        assert_eq!(app.game.state().current_row, 1);
        click_word(&mut app, "MALLORCA");
        assert_eq!(app.game.status(), GameStatus::Won);
    }

    #[test]
    fn test_reset_button_only_when_finished() {
        let mut app = App::new();
        let button = layout::reset_button_rect().center();
        app.apply(Action::Letter('M')).unwrap();
        app.click(button);
        assert_eq!(app.game.state().current_guess, "M");

        app.reset();
        for _ in 0..MAX_GUESSES {
            click_word(&mut app, "QWERTYUI");
        }
        assert_eq!(app.game.status(), GameStatus::Lost);
        app.click(button);
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert_eq!(app.game.state().current_row, 0);
        assert_eq!(app.notice(), None);
    }
}
