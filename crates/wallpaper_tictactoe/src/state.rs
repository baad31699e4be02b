//! Immutable game state advanced by a pure reducer.

use crate::action::{Action, MoveError};
use crate::board::CenterBoard;
use crate::contracts::{Contract, MoveContract};
use crate::coords::{CanonicalCoord, DisplayCoord};
use crate::grid::VisualGrid;
use crate::mode::Mode;
use crate::rules::{WinResult, check_winner, is_full};
use crate::symmetry::{echoes, map_display_to_canonical};
use crate::types::{CellValue, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a line on the display.
    Won(WinResult),
    /// Board is full and no line exists.
    Draw,
}

/// Complete game state.
///
/// A `GameState` is never modified; [`GameState::reduce`] returns the next
/// state and the previous one stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Symmetry mode for this game.
    mode: Mode,
    /// The canonical board.
    board: CenterBoard,
    /// Player whose turn it is.
    to_move: Player,
    /// Canonical cell of the most recent move.
    last_move: Option<CanonicalCoord>,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game under `mode`, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            board: CenterBoard::new(),
            to_move: Player::X,
            last_move: None,
            status: GameStatus::InProgress,
        }
    }

    /// Assembles a state from raw parts without validation.
    #[cfg(any(test, kani))]
    pub(crate) fn from_parts(
        mode: Mode,
        board: CenterBoard,
        to_move: Player,
        last_move: Option<CanonicalCoord>,
        status: GameStatus,
    ) -> Self {
        Self {
            mode,
            board,
            to_move,
            last_move,
            status,
        }
    }

    /// Applies an action, returning the next state.
    ///
    /// # Errors
    ///
    /// Moves are rejected when the game is over, the display cell is
    /// inactive, or the canonical cell behind it is taken.
    #[instrument(skip(self), fields(mode = %self.mode, to_move = %self.to_move))]
    pub fn reduce(&self, action: Action) -> Result<GameState, MoveError> {
        match action {
            Action::ApplyMove(display) => self.apply_move(display),
            Action::SetMode(mode) => {
                info!(from = %self.mode, to = %mode, "Mode changed, starting fresh game");
                Ok(GameState::new(mode))
            }
            Action::Reset => {
                info!("Game reset");
                Ok(GameState::new(self.mode))
            }
        }
    }

    fn apply_move(&self, cell: DisplayCoord) -> Result<GameState, MoveError> {
        let target = MoveContract::pre(self, &cell).inspect_err(|e| {
            warn!(%cell, error = %e, "Move rejected");
        })?;

        let board = self.board.with_cell(target, CellValue::Occupied(self.to_move));
        let status = Self::evaluate(&board, self.mode);
        let next = GameState {
            mode: self.mode,
            board,
            to_move: self.to_move.opponent(),
            last_move: Some(target),
            status,
        };
        debug!(%cell, %target, ?status, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Winner first: a full board with a line is a win, not a draw.
    fn evaluate(board: &CenterBoard, mode: Mode) -> GameStatus {
        match check_winner(&VisualGrid::build(board, mode)) {
            Some(win) => GameStatus::Won(win),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Replays display moves from a fresh game under `mode`.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(mode: Mode, moves: &[DisplayCoord]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(mode), |state, display| {
                state.reduce(Action::ApplyMove(*display))
            })
    }

    /// The display grid for the current board and mode.
    pub fn grid(&self) -> VisualGrid {
        VisualGrid::build(&self.board, self.mode)
    }

    /// Returns true if the display cell is live under this game's mode.
    pub fn is_active(&self, display: DisplayCoord) -> bool {
        map_display_to_canonical(display, self.mode).is_some()
    }

    /// Display cells that show the most recent move.
    pub fn echoes_of_last_move(&self) -> Vec<DisplayCoord> {
        self.last_move
            .map(|canonical| echoes(canonical, self.mode))
            .unwrap_or_default()
    }

    /// The winning line, if the game was won.
    pub fn winning_line(&self) -> Option<[DisplayCoord; 3]> {
        match self.status {
            GameStatus::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns a status string for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn.", self.to_move),
            GameStatus::Won(win) => format!("Game over. Player {} wins!", win.winner),
            GameStatus::Draw => "Game over. Draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
