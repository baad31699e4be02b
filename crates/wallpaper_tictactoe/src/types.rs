//! Core domain types: players and cell contents.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell, on the canonical board or the display grid.
///
/// `Empty` says nothing about whether a display cell is playable; whether a
/// position is live under a mode is answered by
/// [`map_display_to_canonical`](crate::map_display_to_canonical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// No mark.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl CellValue {
    /// Returns true for an unmarked cell.
    pub fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellValue::Empty => None,
            CellValue::Occupied(player) => Some(player),
        }
    }

    /// Single-character rendering, `.` for empty.
    pub fn symbol(self) -> char {
        match self {
            CellValue::Empty => '.',
            CellValue::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Player> for CellValue {
    fn from(player: Player) -> Self {
        CellValue::Occupied(player)
    }
}
