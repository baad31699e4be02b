//! Game rules evaluated over derived boards.
//!
//! Pure functions kept apart from board storage so the reducer and the
//! contract checks can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, WinResult, check_winner};
