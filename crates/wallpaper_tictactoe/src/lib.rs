//! Wallpaper tic-tac-toe - a 3x3 game shown on a 9x9 tiled display.
//!
//! The authoritative board is a single 3x3 grid. The display tiles it nine
//! times, and the chosen [`Mode`] decides how each outer copy is folded:
//! left blank (Standard), translated (Torus), mirrored across top and bottom
//! edges (Klein) or mirrored across every edge (Projective).
//!
//! # Architecture
//!
//! - **Coordinates**: display cells split into sub-board and local parts
//! - **Symmetry**: one folding rule per (mode, sub-board), each its own inverse
//! - **Grid**: the display projected from the board
//! - **Rules**: adjacent three-in-a-row detection and draw checks
//! - **State**: an immutable game state advanced by a pure reducer
//!
//! # Example
//!
//! ```
//! use wallpaper_tictactoe::{Action, DisplayCoord, GameState, Mode};
//!
//! let game = GameState::new(Mode::Klein);
//! let next = game.reduce(Action::ApplyMove(DisplayCoord::new(3, 6)))?;
//! assert_eq!(next.echoes_of_last_move().len(), 9);
//! # Ok::<(), wallpaper_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod coords;
mod grid;
mod invariants;
mod kani_support;
mod mode;
mod rules;
mod state;
mod symmetry;
mod types;

// Crate-level exports - Domain types
pub use mode::Mode;
pub use types::{CellValue, Player};

// Crate-level exports - Coordinates
pub use coords::{
    BOARD_SIZE, CanonicalCoord, DISPLAY_SIZE, DisplayCoord, LocalCoord, MacroCoord, MacroOffset,
    ParseCoordError, compose, decompose, offset_from_center,
};

// Crate-level exports - Symmetry
pub use symmetry::{FoldingRule, echoes, map_display_to_canonical, transform_for};

// Crate-level exports - Boards
pub use board::{CenterBoard, create_empty_board};
pub use grid::{VisualGrid, build_visual_grid};

// Crate-level exports - Rules
pub use rules::{Direction, WinResult, check_winner, is_full};

// Crate-level exports - Game state
pub use action::{Action, MoveError};
pub use state::{GameState, GameStatus};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    BoardMonotonic, CellIsActive, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract,
};
pub use invariants::{
    BalancedMarksInvariant, GridMirrorsBoardInvariant, InactiveCellsEmptyInvariant, Invariant,
    InvariantSet, InvariantViolation, WallpaperInvariants,
};
