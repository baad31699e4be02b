//! The 3x3 canonical board, the single source of truth for game state.

use crate::coords::{BOARD_SIZE, CanonicalCoord};
use crate::types::{CellValue, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 authoritative board, stored row-major.
///
/// Boards are values: [`CenterBoard::with_cell`] returns a new board and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CenterBoard {
    cells: [[CellValue; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl CenterBoard {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of cells (`rows[row][col]`).
    pub fn from_rows(rows: [[CellValue; 3]; 3]) -> Self {
        Self { cells: rows }
    }

    /// Gets the cell at a canonical coordinate.
    pub fn get(&self, coord: CanonicalCoord) -> CellValue {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: CanonicalCoord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns a copy of this board with one cell replaced.
    #[instrument(skip(self))]
    pub fn with_cell(&self, coord: CanonicalCoord, value: CellValue) -> Self {
        let mut next = *self;
        next.cells[coord.row as usize][coord.col as usize] = value;
        next
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[CellValue; 3]; 3] {
        &self.cells
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// Formats the board as three lines of marks, `.` for empty.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Creates a fresh empty board.
///
/// Each call yields an independent value.
#[instrument]
pub fn create_empty_board() -> CenterBoard {
    CenterBoard::new()
}
