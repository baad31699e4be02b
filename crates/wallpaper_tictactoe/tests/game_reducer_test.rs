//! Tests for the game-state reducer.

use wallpaper_tictactoe::{
    Action, CanonicalCoord, CellValue, DisplayCoord, GameState, GameStatus, InvariantSet,
    MacroCoord, Mode, MoveError, Player, WallpaperInvariants, check_winner, decompose,
};

fn d(gx: u8, gy: u8) -> DisplayCoord {
    DisplayCoord::new(gx, gy)
}

#[test]
fn test_game_lifecycle() {
    let game = GameState::new(Mode::Torus);
    assert_eq!(*game.to_move(), Player::X);
    assert_eq!(*game.status(), GameStatus::InProgress);

    let game = game.reduce(Action::ApplyMove(d(7, 7))).expect("valid move");
    assert_eq!(*game.to_move(), Player::O);
    assert_eq!(*game.last_move(), Some(CanonicalCoord::new(1, 1)));
    assert!(WallpaperInvariants::check_all(&game).is_ok());
}

#[test]
fn test_previous_state_survives_move() {
    let first = GameState::new(Mode::Projective);
    let second = first.reduce(Action::ApplyMove(d(0, 4))).expect("valid move");
    let third = second.reduce(Action::ApplyMove(d(4, 4))).expect("valid move");

    assert_eq!(first, GameState::new(Mode::Projective));
    assert_eq!(second.board().count(Player::O), 0);
    assert_eq!(third.board().count(Player::O), 1);
}

#[test]
fn test_projective_click_lands_on_reflected_cell() {
    // Left of center flips rows: local (1, 0) lands on row 2.
    let game = GameState::new(Mode::Projective)
        .reduce(Action::ApplyMove(d(1, 3)))
        .expect("valid move");
    assert_eq!(*game.last_move(), Some(CanonicalCoord::new(1, 2)));
    assert_eq!(
        game.board().get(CanonicalCoord::new(1, 2)),
        CellValue::Occupied(Player::X)
    );
}

#[test]
fn test_echoes_of_last_move_highlight_every_copy() {
    let game = GameState::new(Mode::Klein)
        .reduce(Action::ApplyMove(d(4, 4)))
        .expect("valid move");
    let echoes = game.echoes_of_last_move();

    assert_eq!(echoes.len(), 9);
    for display in &echoes {
        assert_eq!(game.grid().get(*display), CellValue::Occupied(Player::X));
    }
    assert!(GameState::new(Mode::Klein).echoes_of_last_move().is_empty());
}

#[test]
fn test_rejections() {
    let game = GameState::new(Mode::Standard);
    assert_eq!(
        game.reduce(Action::ApplyMove(d(2, 2))),
        Err(MoveError::InactiveCell(d(2, 2)))
    );

    let game = game.reduce(Action::ApplyMove(d(3, 3))).expect("valid move");
    assert_eq!(
        game.reduce(Action::ApplyMove(d(3, 3))),
        Err(MoveError::CellOccupied(CanonicalCoord::new(0, 0)))
    );
}

#[test]
fn test_torus_top_row_reported_first_in_scan() {
    // A full canonical row shows in every copy; the top-left copy is scanned first.
    let moves = [d(2, 0), d(4, 4), d(3, 0), d(5, 5), d(4, 0)];
    let game = GameState::replay(Mode::Torus, &moves).expect("valid replay");

    match game.status() {
        GameStatus::Won(win) => {
            assert_eq!(win.winner, Player::X);
            assert_eq!(win.line, [d(0, 0), d(1, 0), d(2, 0)]);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn test_broken_diagonal_wins_only_across_seam() {
    // X at canonical (2,0), (0,1), (1,2): no line on one board, but on the
    // torus the copies line up diagonally across the seam between sub-boards.
    let moves = [d(5, 3), d(3, 3), d(3, 4), d(5, 5), d(4, 5)];

    let standard = GameState::replay(Mode::Standard, &moves).expect("valid replay");
    assert_eq!(*standard.status(), GameStatus::InProgress);
    assert_eq!(check_winner(&standard.grid()), None);

    let torus = GameState::replay(Mode::Torus, &moves).expect("valid replay");
    let line = [d(2, 0), d(3, 1), d(4, 2)];
    match torus.status() {
        GameStatus::Won(win) => {
            assert_eq!(win.winner, Player::X);
            assert_eq!(win.line, line);
        }
        other => panic!("expected a win, got {other:?}"),
    }

    let sub_boards: Vec<MacroCoord> = line.iter().map(|cell| decompose(*cell).0).collect();
    assert_ne!(sub_boards[0], sub_boards[1]);
}

#[test]
fn test_draw_through_reducer() {
    let moves = [(3, 3), (4, 3), (5, 3), (4, 4), (3, 4), (5, 4), (4, 5), (3, 5), (5, 5)]
        .map(|(gx, gy)| d(gx, gy));
    let game = GameState::replay(Mode::Standard, &moves).expect("valid replay");

    assert_eq!(*game.status(), GameStatus::Draw);
    assert_eq!(game.status_message(), "Game over. Draw!");
    assert_eq!(
        game.reduce(Action::ApplyMove(d(4, 4))),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_mode_switch_discards_board() {
    let game = GameState::replay(Mode::Torus, &[d(0, 0), d(1, 1)]).expect("valid replay");
    let switched = game.reduce(Action::SetMode(Mode::Klein)).expect("mode switch");

    assert_eq!(*switched.mode(), Mode::Klein);
    assert!(switched.board().rows().iter().flatten().all(|c| c.is_empty()));
    assert_eq!(*switched.last_move(), None);
}

#[test]
fn test_replay_stops_at_first_error() {
    let result = GameState::replay(Mode::Standard, &[d(4, 4), d(4, 4)]);
    assert!(matches!(result, Err(MoveError::CellOccupied(_))));
}
