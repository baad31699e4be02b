//! Folding rules relating each sub-board to the canonical center board.
//!
//! For every mode and sub-board offset there is at most one [`FoldingRule`].
//! Each rule is built from the identity and single-axis reflections, so it is
//! its own inverse: the same rule maps a display cell to the canonical cell it
//! mirrors and maps a click back onto the canonical cell a move lands on.
//!
//! | Mode       | center   | left/right | above/below | corners  |
//! |------------|----------|------------|-------------|----------|
//! | Standard   | Identity | -          | -           | -        |
//! | Torus      | Identity | Identity   | Identity    | Identity |
//! | Klein      | Identity | Identity   | FlipCol     | FlipCol  |
//! | Projective | Identity | FlipRow    | FlipCol     | FlipBoth |

use crate::coords::{
    BOARD_SIZE, CanonicalCoord, DisplayCoord, LocalCoord, MacroCoord, MacroOffset, compose,
    decompose, offset_from_center,
};
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a sub-board's local coordinate folds onto the canonical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum FoldingRule {
    /// `col = lx`, `row = ly`.
    Identity,
    /// `col = 2 - lx`, `row = ly`.
    FlipCol,
    /// `col = lx`, `row = 2 - ly`.
    FlipRow,
    /// `col = 2 - lx`, `row = 2 - ly`.
    FlipBoth,
}

impl FoldingRule {
    /// Applies the rule to a local coordinate.
    pub fn apply(self, local: LocalCoord) -> CanonicalCoord {
        const MAX: u8 = BOARD_SIZE - 1;
        let (col, row) = match self {
            FoldingRule::Identity => (local.lx, local.ly),
            FoldingRule::FlipCol => (MAX - local.lx, local.ly),
            FoldingRule::FlipRow => (local.lx, MAX - local.ly),
            FoldingRule::FlipBoth => (MAX - local.lx, MAX - local.ly),
        };
        CanonicalCoord::new(col, row)
    }

    /// Applies the rule to a canonical coordinate, giving the local position
    /// inside the sub-board that mirrors it.
    pub fn unapply(self, canonical: CanonicalCoord) -> LocalCoord {
        let folded = self.apply(LocalCoord::new(canonical.col, canonical.row));
        LocalCoord::new(folded.col, folded.row)
    }
}

/// Looks up the folding rule for a sub-board, `None` when it is inactive.
#[instrument]
pub fn transform_for(mode: Mode, offset: MacroOffset) -> Option<FoldingRule> {
    let crosses_vertical = offset.dy != 0;
    let crosses_horizontal = offset.dx != 0;

    match mode {
        Mode::Standard => (offset == MacroOffset::CENTER).then_some(FoldingRule::Identity),
        Mode::Torus => Some(FoldingRule::Identity),
        Mode::Klein => Some(if crosses_vertical {
            FoldingRule::FlipCol
        } else {
            FoldingRule::Identity
        }),
        Mode::Projective => Some(match (crosses_horizontal, crosses_vertical) {
            (false, false) => FoldingRule::Identity,
            (true, false) => FoldingRule::FlipRow,
            (false, true) => FoldingRule::FlipCol,
            (true, true) => FoldingRule::FlipBoth,
        }),
    }
}

/// Maps a display cell to the canonical cell it shows under `mode`.
///
/// Returns `None` for an inactive cell, one that is never part of play.
#[instrument]
pub fn map_display_to_canonical(cell: DisplayCoord, mode: Mode) -> Option<CanonicalCoord> {
    let (macro_coord, local) = decompose(cell);
    let rule = transform_for(mode, offset_from_center(macro_coord))?;
    Some(rule.apply(local))
}

/// Every display cell that shows `canonical` under `mode`, in row-major order.
///
/// One cell per active sub-board, found by unfolding `canonical` through
/// that sub-board's rule.
#[instrument]
pub fn echoes(canonical: CanonicalCoord, mode: Mode) -> Vec<DisplayCoord> {
    let mut cells: Vec<DisplayCoord> = MacroOffset::all()
        .filter_map(|offset| {
            let rule = transform_for(mode, offset)?;
            let macro_coord = MacroCoord {
                mx: (offset.dx + 1) as u8,
                my: (offset.dy + 1) as u8,
            };
            Some(compose(macro_coord, rule.unapply(canonical)))
        })
        .collect();
    cells.sort_by_key(|cell| (cell.gy, cell.gx));
    cells
}
