//! Board fullness, the draw half of game evaluation.

use crate::board::CenterBoard;
use tracing::instrument;

/// Checks if the canonical board is full (all nine cells marked).
///
/// A full board may still hold a winning line; check the winner first.
#[instrument]
pub fn is_full(board: &CenterBoard) -> bool {
    board.rows().iter().flatten().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CanonicalCoord;
    use crate::types::{CellValue, Player};

    const X: CellValue = CellValue::Occupied(Player::X);
    const O: CellValue = CellValue::Occupied(Player::O);

    #[test]
    fn test_full_board() {
        let board = CenterBoard::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&CenterBoard::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = CenterBoard::new().with_cell(CanonicalCoord::new(1, 1), X);
        assert!(!is_full(&board));
    }
}
