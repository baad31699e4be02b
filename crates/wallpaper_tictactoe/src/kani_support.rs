//! Kani arbitrary implementations for game types.
//!
//! These let Kani explore every value of our types during model checking.

#[cfg(kani)]
use crate::{
    CanonicalCoord, CellValue, CenterBoard, GameState, GameStatus, LocalCoord, MacroOffset, Mode,
    Player,
};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for CellValue {
    fn any() -> Self {
        if kani::any() {
            CellValue::Empty
        } else {
            CellValue::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Mode {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        match index {
            0 => Mode::Standard,
            1 => Mode::Torus,
            2 => Mode::Klein,
            _ => Mode::Projective,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for MacroOffset {
    fn any() -> Self {
        let dx: i8 = kani::any();
        let dy: i8 = kani::any();
        kani::assume((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
        MacroOffset::new(dx, dy)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for LocalCoord {
    fn any() -> Self {
        let lx: u8 = kani::any();
        let ly: u8 = kani::any();
        kani::assume(lx < 3 && ly < 3);
        LocalCoord::new(lx, ly)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for CenterBoard {
    fn any() -> Self {
        let rows: [[CellValue; 3]; 3] = kani::any();
        CenterBoard::from_rows(rows)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GameState {
    fn any() -> Self {
        let last_move = if kani::any() {
            let col: u8 = kani::any();
            let row: u8 = kani::any();
            kani::assume(col < 3 && row < 3);
            Some(CanonicalCoord::new(col, row))
        } else {
            None
        };

        // Bypasses the reducer so Kani can reach states it would never build.
        GameState::from_parts(
            kani::any(),
            kani::any(),
            kani::any(),
            last_move,
            GameStatus::InProgress,
        )
    }
}
