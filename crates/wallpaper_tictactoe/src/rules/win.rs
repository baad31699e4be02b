//! Three-in-a-row detection on the display grid.

use crate::coords::DisplayCoord;
use crate::grid::VisualGrid;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A scan direction, in the order the detector tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(1, 0)`
    East,
    /// `(0, 1)`
    South,
    /// `(1, 1)`
    Southeast,
    /// `(1, -1)`
    Northeast,
}

impl Direction {
    /// Directions in scan order.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::Southeast,
        Direction::Northeast,
    ];

    /// Unit step `(dx, dy)` of this direction.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::Southeast => (1, 1),
            Direction::Northeast => (1, -1),
        }
    }
}

/// A completed line: the winner and the three display cells, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// Owner of the line.
    pub winner: Player,
    /// Start cell followed by the next two cells along the direction.
    pub line: [DisplayCoord; 3],
}

impl WinResult {
    /// Returns true if `display` is one of the three cells in the line.
    pub fn contains(&self, display: DisplayCoord) -> bool {
        self.line.contains(&display)
    }
}

/// Scans the display for three equal marks in a row.
///
/// Cells are visited row-major and each occupied cell tries
/// [`Direction::SCAN_ORDER`]; the first line found is returned. Only
/// adjacent cells count, and lines stop at the grid edge.
#[instrument(skip(grid))]
pub fn check_winner(grid: &VisualGrid) -> Option<WinResult> {
    for start in DisplayCoord::all() {
        let Some(player) = grid.get(start).player() else {
            continue;
        };

        for direction in Direction::SCAN_ORDER {
            let (dx, dy) = direction.step();
            let (Some(second), Some(third)) = (start.step(dx, dy), start.step(2 * dx, 2 * dy))
            else {
                continue;
            };

            if grid.get(second).player() == Some(player)
                && grid.get(third).player() == Some(player)
            {
                debug!(%player, %start, ?direction, "Winning line found");
                return Some(WinResult {
                    winner: player,
                    line: [start, second, third],
                });
            }
        }
    }

    None
}
