//! First-class action types for the game reducer.
//!
//! Actions are domain events, not side effects. They name what the player
//! asked for; [`GameState::reduce`](crate::GameState::reduce) decides what
//! it means.

use crate::coords::{CanonicalCoord, DisplayCoord};
use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Something the player can do to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Mark the canonical cell shown at a display position.
    ApplyMove(DisplayCoord),
    /// Switch symmetry mode, discarding the current game.
    SetMode(Mode),
    /// Start over under the current mode.
    Reset,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::ApplyMove(display) => write!(f, "move at {}", display),
            Action::SetMode(mode) => write!(f, "switch to {}", mode.label()),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The display position is not live under the current mode.
    #[display("Cell {} is inactive in this mode", _0)]
    InactiveCell(DisplayCoord),

    /// The canonical cell behind the display position is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(CanonicalCoord),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
