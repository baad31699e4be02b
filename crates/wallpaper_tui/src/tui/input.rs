//! Keyboard mapping for cursor movement and mode selection.

use crossterm::event::KeyCode;
use wallpaper_tictactoe::{DisplayCoord, Mode};

/// Moves the cursor one display cell, stopping at the grid edge.
///
/// Arrow keys and vi-style `hjkl` both work. Other keys leave the cursor alone.
pub fn move_cursor(cursor: DisplayCoord, key: KeyCode) -> DisplayCoord {
    let (dx, dy) = match key {
        KeyCode::Left | KeyCode::Char('h') => (-1, 0),
        KeyCode::Right | KeyCode::Char('l') => (1, 0),
        KeyCode::Up | KeyCode::Char('k') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') => (0, 1),
        _ => return cursor,
    };
    cursor.step(dx, dy).unwrap_or(cursor)
}

/// Maps the digit keys `1`-`4` to modes in selection order.
pub fn mode_for_key(key: KeyCode) -> Option<Mode> {
    match key {
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            digit.checked_sub(1).and_then(Mode::from_index)
        }
        _ => None,
    }
}
