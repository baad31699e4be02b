//! Bounded model checking of the folding rules with Kani.
//!
//! The harnesses cover every mode, offset and local coordinate, so the
//! involution property is proved for the whole table rather than sampled.

#[cfg(kani)]
mod proofs {
    use crate::{
        BalancedMarksInvariant, DisplayCoord, GameState, Invariant, LocalCoord, MacroOffset, Mode,
        map_display_to_canonical, transform_for,
    };

    /// Every defined folding rule is its own inverse.
    #[kani::proof]
    fn verify_folding_rules_are_involutions() {
        let mode: Mode = kani::any();
        let offset: MacroOffset = kani::any();
        let local: LocalCoord = kani::any();

        if let Some(rule) = transform_for(mode, offset) {
            let once = rule.apply(local);
            let twice = rule.apply(LocalCoord::new(once.col, once.row));
            assert!(twice.col == local.lx && twice.row == local.ly);
        }
    }

    /// Standard mode activates exactly the center sub-board; other modes activate everything.
    #[kani::proof]
    fn verify_activation_coverage() {
        let mode: Mode = kani::any();
        let gx: u8 = kani::any();
        let gy: u8 = kani::any();
        kani::assume(gx < 9 && gy < 9);

        let active = map_display_to_canonical(DisplayCoord::new(gx, gy), mode).is_some();
        let in_center = (3..=5).contains(&gx) && (3..=5).contains(&gy);
        match mode {
            Mode::Standard => assert!(active == in_center),
            _ => assert!(active),
        }
    }

    /// One legal move from any balanced state keeps the marks balanced.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_single_move_keeps_balance() {
        let game: GameState = kani::any();
        kani::assume(BalancedMarksInvariant::holds(&game));
        let gx: u8 = kani::any();
        let gy: u8 = kani::any();
        kani::assume(gx < 9 && gy < 9);

        if let Ok(next) = game.reduce(crate::Action::ApplyMove(DisplayCoord::new(gx, gy))) {
            assert!(BalancedMarksInvariant::holds(&next));
        }
    }
}
