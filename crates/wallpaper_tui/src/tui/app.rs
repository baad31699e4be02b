//! Application state and logic.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, info, instrument};
use wallpaper_tictactoe::{Action, DisplayCoord, GameState, Mode};

use super::input::{mode_for_key, move_cursor};

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameState,
    cursor: DisplayCoord,
    status_message: String,
    show_inactive: bool,
}

impl App {
    /// Creates a new application with a fresh game under `mode`.
    pub fn new(mode: Mode, show_inactive: bool) -> Self {
        let game = GameState::new(mode);
        Self {
            status_message: game.status_message(),
            game,
            cursor: DisplayCoord::new(4, 4),
            show_inactive,
        }
    }

    /// Sends an action through the reducer.
    ///
    /// A rejected move keeps the current game and reports the reason in the
    /// status line.
    #[instrument(skip(self), fields(mode = %self.game.mode()))]
    pub fn dispatch(&mut self, action: Action) {
        match self.game.reduce(action) {
            Ok(next) => {
                debug!(%action, "Action applied");
                self.game = next;
                self.status_message = next.status_message();
            }
            Err(e) => {
                debug!(%action, error = %e, "Action rejected");
                self.status_message = format!("{}. {}", e, self.game.status_message());
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::ApplyMove(self.cursor)),
            KeyCode::Char('r') => self.dispatch(Action::Reset),
            KeyCode::Char('m') => self.dispatch(Action::SetMode(self.game.mode().next())),
            other => {
                if let Some(mode) = mode_for_key(other) {
                    self.dispatch(Action::SetMode(mode));
                } else {
                    self.cursor = move_cursor(self.cursor, other);
                }
            }
        }
        Control::Continue
    }

    /// Plays the display cell under a mouse click and moves the cursor there.
    pub fn handle_click(&mut self, display: DisplayCoord) {
        self.cursor = display;
        self.dispatch(Action::ApplyMove(display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallpaper_tictactoe::{CanonicalCoord, Player};

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(Mode::Standard, true);
        assert_eq!(app.handle_key(KeyCode::Enter), Control::Continue);
        assert_eq!(*app.game().last_move(), Some(CanonicalCoord::new(1, 1)));
        assert_eq!(app.status_message(), "Player O's turn.");
    }

    #[test]
    fn test_rejected_move_keeps_game() {
        let mut app = App::new(Mode::Standard, true);
        app.handle_click(DisplayCoord::new(0, 0));
        assert_eq!(*app.game(), GameState::new(Mode::Standard));
        assert!(app.status_message().contains("inactive"));
        assert_eq!(*app.cursor(), DisplayCoord::new(0, 0));
    }

    #[test]
    fn test_click_on_echo_marks_canonical_cell() {
        let mut app = App::new(Mode::Torus, true);
        app.handle_click(DisplayCoord::new(8, 8));
        assert_eq!(
            app.game().board().get(CanonicalCoord::new(2, 2)).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_mode_keys_start_fresh_games() {
        let mut app = App::new(Mode::Standard, false);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('m'));
        assert_eq!(*app.game(), GameState::new(Mode::Torus));

        app.handle_key(KeyCode::Char('4'));
        assert_eq!(*app.game().mode(), Mode::Projective);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut app = App::new(Mode::Klein, true);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(*app.game(), GameState::new(Mode::Klein));
    }

    #[test]
    fn test_navigation_and_quit() {
        let mut app = App::new(Mode::Torus, true);
        app.handle_key(KeyCode::Char('h'));
        app.handle_key(KeyCode::Up);
        assert_eq!(*app.cursor(), DisplayCoord::new(3, 3));
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
