//! Grid mirrors board invariant: every live display cell shows its canonical cell.

use super::Invariant;
use crate::coords::DisplayCoord;
use crate::state::GameState;
use crate::symmetry::map_display_to_canonical;

/// Invariant: each mapped display cell equals `board[row][col]` of its fold.
pub struct GridMirrorsBoardInvariant;

impl Invariant<GameState> for GridMirrorsBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        DisplayCoord::all().all(|display| match map_display_to_canonical(display, *game.mode()) {
            Some(canonical) => grid.get(display) == game.board().get(canonical),
            None => true,
        })
    }

    fn description() -> &'static str {
        "Every live display cell mirrors its canonical cell"
    }
}
