//! Inactive cells stay empty.

use super::Invariant;
use crate::coords::DisplayCoord;
use crate::state::GameState;

/// Invariant: display cells with no folding rule never show a mark.
pub struct InactiveCellsEmptyInvariant;

impl Invariant<GameState> for InactiveCellsEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        DisplayCoord::all()
            .filter(|display| !game.is_active(*display))
            .all(|display| grid.get(display).is_empty())
    }

    fn description() -> &'static str {
        "Inactive display cells are always empty"
    }
}
