//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use crate::action::MoveError;
use crate::coords::{CanonicalCoord, DisplayCoord};
use crate::invariants::{InvariantSet, WallpaperInvariants};
use crate::state::GameState;
use crate::symmetry::map_display_to_canonical;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Target;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Target, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished game.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The display cell must be live under the game's mode.
pub struct CellIsActive;

impl CellIsActive {
    /// Returns the canonical cell behind `cell`.
    pub fn check(cell: &DisplayCoord, game: &GameState) -> Result<CanonicalCoord, MoveError> {
        map_display_to_canonical(*cell, *game.mode()).ok_or(MoveError::InactiveCell(*cell))
    }
}

/// Precondition: The canonical cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a canonical cell that already holds a mark.
    pub fn check(target: CanonicalCoord, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(target) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(target))
        }
    }
}

/// Composite precondition: game in progress, cell active, canonical cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the canonical target.
    #[instrument(skip(game))]
    pub fn check(cell: &DisplayCoord, game: &GameState) -> Result<CanonicalCoord, MoveError> {
        GameNotOver::check(game)?;
        let target = CellIsActive::check(cell, game)?;
        CellIsEmpty::check(target, game)?;
        Ok(target)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game in progress
/// - Display cell active
/// - Canonical cell empty
///
/// Postconditions:
/// - Exactly one canonical cell changed, from empty to the mover's mark
/// - Game invariants hold
pub struct MoveContract;

impl Contract<GameState, DisplayCoord> for MoveContract {
    type Target = CanonicalCoord;

    fn pre(game: &GameState, display: &DisplayCoord) -> Result<CanonicalCoord, MoveError> {
        LegalMove::check(display, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !BoardMonotonic::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must fill exactly one empty cell".to_string(),
            ));
        }

        WallpaperInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Transition property: marks are never overwritten and one move adds one mark.
pub struct BoardMonotonic;

impl BoardMonotonic {
    /// Compares the boards before and after a single move.
    #[instrument(skip_all)]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut changed = CanonicalCoord::all().filter(|coord| {
            before.board().get(*coord) != after.board().get(*coord)
        });

        let valid = match (changed.next(), changed.next()) {
            (Some(coord), None) => {
                before.board().is_empty(coord)
                    && after.board().get(coord).player() == Some(*before.to_move())
            }
            _ => false,
        };
        if !valid {
            warn!("Board monotonicity violated");
        }
        valid
    }
}
