//! Tests for the game engine lifecycle.

use tictactoe_engine::{Cell, GameEngine, GameStatus, InvalidMove, Player, Position, ScoreTally};

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for index in moves {
        engine.apply_move(*index).expect("legal move");
    }
}

#[test]
fn test_every_index_accepted_exactly_once() {
    for index in 0..9 {
        let mut engine = GameEngine::new();
        assert!(engine.apply_move(index).is_ok());

        let pos = Position::from_index(index).unwrap();
        assert_eq!(engine.apply_move(index), Err(InvalidMove::Occupied(pos)));
    }
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);

    let before = *engine.state();
    assert_eq!(
        engine.apply_move(4),
        Err(InvalidMove::Occupied(Position::Center))
    );
    assert_eq!(*engine.state(), before);
    assert_eq!(engine.state().current_player(), Player::X);
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(9), Err(InvalidMove::OutOfRange { index: 9 }));
    assert_eq!(
        engine.apply_move(usize::MAX),
        Err(InvalidMove::OutOfRange { index: usize::MAX })
    );
    assert_eq!(engine.state().board().moves_played(), 0);
    assert_eq!(engine.state().current_player(), Player::X);
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    match engine.state().status() {
        GameStatus::Won(player, line) => {
            assert_eq!(*player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert_eq!(engine.winner(), Some(Player::X));
    assert!(!engine.is_draw());
    assert_eq!(*engine.scores().x(), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(*engine.state().status(), GameStatus::Draw);
    assert!(engine.is_draw());
    assert_eq!(engine.winner(), None);
    assert_eq!(*engine.scores().draws(), 1);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[7, 1, 2, 3, 4, 6, 0, 5, 8]);

    assert!(engine.state().board().is_full());
    assert_eq!(engine.winner(), Some(Player::X));
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 4, 8]));
    assert_eq!(*engine.scores().draws(), 0);
}

#[test]
fn test_o_can_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(engine.winner(), Some(Player::O));
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([2, 4, 6]));
    assert_eq!(engine.scores().wins(Player::O), 1);
}

#[test]
fn test_finished_round_rejects_moves_and_scores_once() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    let before = *engine.state();
    assert_eq!(engine.apply_move(8), Err(InvalidMove::GameOver));
    assert_eq!(engine.apply_position(Position::BottomRight), Err(InvalidMove::GameOver));
    assert_eq!(*engine.state(), before);
    assert_eq!(engine.scores().rounds(), 1);
}

#[test]
fn test_reset_round_keeps_score() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset_round();

    assert!(engine.state().board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(*engine.state().status(), GameStatus::InProgress);
    assert_eq!(engine.state().current_player(), Player::X);
    assert_eq!(*engine.scores().x(), 1);
}

#[test]
fn test_reset_match_zeroes_score() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset_round();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.scores().rounds(), 2);

    engine.reset_match();
    assert_eq!(*engine.scores(), ScoreTally::default());
    assert_eq!(engine.state().board().moves_played(), 0);
}

#[test]
fn test_scores_accumulate_over_rounds() {
    let mut engine = GameEngine::new();
    for _ in 0..3 {
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.reset_round();
    }
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(*engine.scores().x(), 3);
    assert_eq!(*engine.scores().o(), 1);
    assert_eq!(*engine.saved_scores(), *engine.scores());
}
