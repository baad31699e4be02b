//! Balanced marks invariant: X and O alternate, X first.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: X has as many marks as O, or one more.
///
/// X moves whenever the counts are equal, O whenever X is one ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        match x_count.checked_sub(o_count) {
            Some(0) => *game.to_move() == Player::X,
            Some(1) => *game.to_move() == Player::O,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate, X first (X count - O count is 0 or 1)"
    }
}
