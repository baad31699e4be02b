//! The 9x9 display grid projected from the canonical board.

use crate::board::CenterBoard;
use crate::coords::{DISPLAY_SIZE, DisplayCoord};
use crate::mode::Mode;
use crate::symmetry::map_display_to_canonical;
use crate::types::CellValue;
use serde::Serialize;
use tracing::{debug, instrument};

/// 9x9 display grid, indexed `[gy][gx]`.
///
/// Always derived from a board and a mode; inactive cells read as
/// [`CellValue::Empty`], same as playable empty cells. Outside this crate
/// the only constructor is [`VisualGrid::build`]:
///
/// ```compile_fail
/// use wallpaper_tictactoe::{CellValue, VisualGrid};
///
/// let _ = VisualGrid::from_rows([[CellValue::Empty; 9]; 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VisualGrid {
    cells: [[CellValue; DISPLAY_SIZE as usize]; DISPLAY_SIZE as usize],
}

impl VisualGrid {
    /// Projects `board` onto the display under `mode`.
    #[instrument(skip(board))]
    pub fn build(board: &CenterBoard, mode: Mode) -> Self {
        let mut cells = [[CellValue::Empty; DISPLAY_SIZE as usize]; DISPLAY_SIZE as usize];
        for display in DisplayCoord::all() {
            if let Some(canonical) = map_display_to_canonical(display, mode) {
                cells[display.gy as usize][display.gx as usize] = board.get(canonical);
            }
        }
        debug!("Display grid rebuilt");
        Self { cells }
    }

    /// Wraps explicit rows (`rows[gy][gx]`) without deriving them from a board.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [[CellValue; 9]; 9]) -> Self {
        Self { cells: rows }
    }

    /// Gets the cell at a display coordinate.
    pub fn get(&self, display: DisplayCoord) -> CellValue {
        self.cells[display.gy as usize][display.gx as usize]
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[CellValue; 9]; 9] {
        &self.cells
    }

    /// Formats the grid as nine lines, sub-boards separated by spaces.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (gy, row) in self.cells.iter().enumerate() {
            if gy > 0 {
                result.push('\n');
                if gy % 3 == 0 {
                    result.push('\n');
                }
            }
            for (gx, cell) in row.iter().enumerate() {
                if gx > 0 && gx % 3 == 0 {
                    result.push(' ');
                }
                result.push(cell.symbol());
            }
        }
        result
    }
}

/// Projects `board` onto the 9x9 display under `mode`.
pub fn build_visual_grid(board: &CenterBoard, mode: Mode) -> VisualGrid {
    VisualGrid::build(board, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CanonicalCoord;
    use crate::types::Player;
    use strum::IntoEnumIterator;

    fn sample_board() -> CenterBoard {
        CenterBoard::new()
            .with_cell(CanonicalCoord::new(0, 0), Player::X.into())
            .with_cell(CanonicalCoord::new(2, 0), Player::O.into())
            .with_cell(CanonicalCoord::new(1, 1), Player::X.into())
            .with_cell(CanonicalCoord::new(0, 2), Player::O.into())
    }

    #[test]
    fn test_grid_matches_board_at_every_mapped_cell() {
        let board = sample_board();
        for mode in Mode::iter() {
            let grid = VisualGrid::build(&board, mode);
            for display in DisplayCoord::all() {
                match map_display_to_canonical(display, mode) {
                    Some(canonical) => assert_eq!(grid.get(display), board.get(canonical)),
                    None => assert_eq!(grid.get(display), CellValue::Empty),
                }
            }
        }
    }

    #[test]
    fn test_torus_replicates_single_mark() {
        let board = CenterBoard::new().with_cell(CanonicalCoord::new(0, 0), Player::X.into());
        let grid = build_visual_grid(&board, Mode::Torus);

        let marked: Vec<_> = DisplayCoord::all()
            .filter(|d| grid.get(*d) == CellValue::Occupied(Player::X))
            .collect();
        let expected: Vec<_> = [0, 3, 6]
            .into_iter()
            .flat_map(|gy| [0, 3, 6].into_iter().map(move |gx| DisplayCoord::new(gx, gy)))
            .collect();
        assert_eq!(marked, expected);
    }

    #[test]
    fn test_standard_leaves_outer_ring_empty() {
        let grid = VisualGrid::build(&sample_board(), Mode::Standard);
        assert_eq!(grid.get(DisplayCoord::new(3, 3)), CellValue::Occupied(Player::X));
        assert_eq!(grid.get(DisplayCoord::new(0, 0)), CellValue::Empty);
        assert_eq!(grid.get(DisplayCoord::new(6, 3)), CellValue::Empty);
    }

    #[test]
    fn test_display_layout() {
        let grid = VisualGrid::build(&sample_board(), Mode::Standard);
        let text = grid.display();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[4], "... X.O ...");
        assert_eq!(lines[3], "");
    }
}
