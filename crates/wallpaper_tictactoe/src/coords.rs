//! Coordinate types for the canonical board and the tiled display.
//!
//! A display coordinate `(gx, gy)` splits into a macro coordinate (which of
//! the nine sub-boards) and a local coordinate (the cell inside it):
//! `mx = gx / 3`, `lx = gx % 3`, and likewise for `y`. The center
//! sub-board sits at macro `(1, 1)`.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the canonical board and of each sub-board.
pub const BOARD_SIZE: u8 = 3;

/// Side length of the display grid.
pub const DISPLAY_SIZE: u8 = BOARD_SIZE * BOARD_SIZE;

/// A cell on the 3x3 authoritative board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalCoord {
    /// Column, 0-2.
    pub col: u8,
    /// Row, 0-2.
    pub row: u8,
}

impl CanonicalCoord {
    /// Creates a canonical coordinate. Both components must be below 3.
    pub const fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE && row < BOARD_SIZE);
        Self { col, row }
    }

    /// Creates a canonical coordinate, or `None` when out of range.
    pub fn try_new(col: u8, row: u8) -> Option<Self> {
        (col < BOARD_SIZE && row < BOARD_SIZE).then_some(Self { col, row })
    }

    /// All nine canonical cells in row-major order.
    pub fn all() -> impl Iterator<Item = CanonicalCoord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| CanonicalCoord { col, row }))
    }
}

impl std::fmt::Display for CanonicalCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(col {}, row {})", self.col, self.row)
    }
}

/// A cell on the 9x9 display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayCoord {
    /// Column, 0-8.
    pub gx: u8,
    /// Row, 0-8.
    pub gy: u8,
}

impl DisplayCoord {
    /// Creates a display coordinate. Both components must be below 9.
    pub const fn new(gx: u8, gy: u8) -> Self {
        debug_assert!(gx < DISPLAY_SIZE && gy < DISPLAY_SIZE);
        Self { gx, gy }
    }

    /// Creates a display coordinate, or `None` when out of range.
    pub fn try_new(gx: u8, gy: u8) -> Option<Self> {
        (gx < DISPLAY_SIZE && gy < DISPLAY_SIZE).then_some(Self { gx, gy })
    }

    /// Offsets this coordinate by a signed step, or `None` if that leaves the grid.
    pub fn step(self, dx: i8, dy: i8) -> Option<Self> {
        let gx = self.gx.checked_add_signed(dx)?;
        let gy = self.gy.checked_add_signed(dy)?;
        Self::try_new(gx, gy)
    }

    /// All 81 display cells in row-major order (`gy` outer, `gx` inner).
    pub fn all() -> impl Iterator<Item = DisplayCoord> {
        (0..DISPLAY_SIZE).flat_map(|gy| (0..DISPLAY_SIZE).map(move |gx| DisplayCoord { gx, gy }))
    }
}

impl std::fmt::Display for DisplayCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.gx, self.gy)
    }
}

/// Error parsing a `gx,gy` display coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid display coordinate {:?}: expected \"gx,gy\" with both in 0-8", input)]
pub struct ParseCoordError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for DisplayCoord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError {
            input: s.to_string(),
        };
        let (gx, gy) = s.trim().split_once(',').ok_or_else(err)?;
        let gx = gx.trim().parse::<u8>().map_err(|_| err())?;
        let gy = gy.trim().parse::<u8>().map_err(|_| err())?;
        Self::try_new(gx, gy).ok_or_else(err)
    }
}

/// Which of the nine sub-boards a display cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroCoord {
    /// Sub-board column, 0-2.
    pub mx: u8,
    /// Sub-board row, 0-2.
    pub my: u8,
}

impl MacroCoord {
    /// The center sub-board.
    pub const CENTER: MacroCoord = MacroCoord { mx: 1, my: 1 };
}

/// Position of a display cell within its sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCoord {
    /// Column within the sub-board, 0-2.
    pub lx: u8,
    /// Row within the sub-board, 0-2.
    pub ly: u8,
}

impl LocalCoord {
    /// Creates a local coordinate. Both components must be below 3.
    pub const fn new(lx: u8, ly: u8) -> Self {
        debug_assert!(lx < BOARD_SIZE && ly < BOARD_SIZE);
        Self { lx, ly }
    }

    /// All nine local positions in row-major order.
    pub fn all() -> impl Iterator<Item = LocalCoord> {
        (0..BOARD_SIZE).flat_map(|ly| (0..BOARD_SIZE).map(move |lx| LocalCoord { lx, ly }))
    }
}

/// Direction of a sub-board relative to the center, each component in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacroOffset {
    /// Horizontal direction.
    pub dx: i8,
    /// Vertical direction.
    pub dy: i8,
}

impl MacroOffset {
    /// Offset of the center sub-board.
    pub const CENTER: MacroOffset = MacroOffset { dx: 0, dy: 0 };

    /// Creates an offset. Both components must lie in {-1, 0, 1}.
    pub const fn new(dx: i8, dy: i8) -> Self {
        debug_assert!(dx >= -1 && dx <= 1 && dy >= -1 && dy <= 1);
        Self { dx, dy }
    }

    /// All nine offsets in row-major order.
    pub fn all() -> impl Iterator<Item = MacroOffset> {
        (-1..=1).flat_map(|dy| (-1..=1).map(move |dx| MacroOffset { dx, dy }))
    }
}

/// Splits a display coordinate into its sub-board and in-sub-board parts.
#[instrument]
pub fn decompose(cell: DisplayCoord) -> (MacroCoord, LocalCoord) {
    (
        MacroCoord {
            mx: cell.gx / BOARD_SIZE,
            my: cell.gy / BOARD_SIZE,
        },
        LocalCoord {
            lx: cell.gx % BOARD_SIZE,
            ly: cell.gy % BOARD_SIZE,
        },
    )
}

/// Inverse of [`decompose`].
#[instrument]
pub fn compose(macro_coord: MacroCoord, local: LocalCoord) -> DisplayCoord {
    DisplayCoord::new(
        macro_coord.mx * BOARD_SIZE + local.lx,
        macro_coord.my * BOARD_SIZE + local.ly,
    )
}

/// Direction of a sub-board from the center.
#[instrument]
pub fn offset_from_center(macro_coord: MacroCoord) -> MacroOffset {
    MacroOffset {
        dx: macro_coord.mx as i8 - 1,
        dy: macro_coord.my as i8 - 1,
    }
}
