//! End-to-end tests of the session state machine
//!
//! This test suite covers:
//! - Win and draw transitions with the exact winning line reported
//! - Undo semantics for human-vs-human and human-vs-computer play
//! - Replay of move history onto a fresh board
//! - Event delivery to registered listeners

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_engine::agent::ai::{SearchEngine, Tier};
use tictactoe_engine::game_repr::{Board, LineKind, Mark};
use tictactoe_engine::scoreboard::Scoreboard;
use tictactoe_engine::{EngineError, GameEvent, GameSession, GameStatus, IllegalMove};

fn play(session: &mut GameSession, moves: &[usize]) -> GameEvent {
    let mut last = None;
    for &idx in moves {
        let mark = session.current_player();
        last = Some(session.submit_move(idx, mark).expect("legal move"));
    }
    last.expect("at least one move")
}

#[test]
fn test_ascending_diagonal_win() {
    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    let event = play(&mut session, &[4, 0, 2, 1, 6]);

    match event {
        GameEvent::Win { winner, line } => {
            assert_eq!(winner, Mark::X);
            assert_eq!(line.cells(), &[6, 4, 2]);
            assert_eq!(line.kind(), LineKind::DiagonalUp);
        }
        other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(session.status().winner(), Some(Mark::X));
    assert_eq!(session.submit_move(8, Mark::O), Err(IllegalMove::GameOver.into()));
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    // X O X / X O O / O X X
    let event = play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(event, GameEvent::Draw);
    assert_eq!(session.status(), &GameStatus::Drawn);
    assert!(session.legal_moves().is_empty());
}

#[test]
fn test_undo_two_moves_human_vs_human() {
    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    play(&mut session, &[0, 4]);
    assert_eq!(session.undo().unwrap(), 1);
    assert_eq!(session.undo().unwrap(), 1);

    assert!(session.board().is_empty());
    assert_eq!(session.current_player(), Mark::X);
    assert_eq!(session.status(), &GameStatus::InProgress);
    // nothing left to undo
    assert_eq!(session.undo().unwrap(), 0);
}

#[test]
fn test_undo_then_replay_restores_state() {
    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    play(&mut session, &[4, 0, 2, 1]);
    let board = session.board().clone();
    let status = session.status().clone();

    session.undo().unwrap();
    session.submit_move(1, Mark::O).unwrap();

    assert_eq!(session.board(), &board);
    assert_eq!(session.status(), &status);
}

#[test]
fn test_undo_against_computer_pops_both_moves() {
    let mut session = GameSession::new(3, 3, Mark::X).unwrap().with_computer(Mark::O);
    let mut engine = SearchEngine::with_seed(3);

    session.submit_move(4, Mark::X).unwrap();
    let reply = session.choose_move(Tier::Minimax, &mut engine).unwrap();
    session.submit_move(reply, Mark::O).unwrap();

    assert_eq!(session.undo().unwrap(), 2);
    assert!(session.history().is_empty());
    assert_eq!(session.current_player(), Mark::X);
}

#[test]
fn test_undo_against_computer_without_human_move_is_noop() {
    // Computer opened; there is no human move to take back yet
    let mut session = GameSession::new(3, 3, Mark::O).unwrap().with_computer(Mark::O);
    session.submit_move(4, Mark::O).unwrap();
    assert_eq!(session.undo().unwrap(), 0);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.current_player(), Mark::X);
}

#[test]
fn test_replay_reproduces_board() {
    let mut session = GameSession::new(5, 4, Mark::X).unwrap();
    play(&mut session, &[12, 6, 13, 7, 0, 18, 24]);
    let replayed = Board::replay(5, session.history()).unwrap();
    assert_eq!(&replayed, session.board());
}

#[test]
fn test_listeners_receive_events() {
    let seen: Rc<RefCell<Vec<GameEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let scoreboard = Rc::new(RefCell::new(Scoreboard::new()));

    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    let sink = seen.clone();
    session.add_listener(Box::new(move |event: &GameEvent| sink.borrow_mut().push(event.clone())));
    let tally = scoreboard.clone();
    session.add_listener(Box::new(move |event: &GameEvent| tally.borrow_mut().record(event)));

    play(&mut session, &[0, 3, 1, 4, 2]);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    assert!(seen[..4].iter().all(|event| !event.is_terminal()));
    assert!(matches!(seen[4], GameEvent::Win { winner: Mark::X, .. }));
    assert_eq!(scoreboard.borrow().wins(Mark::X), 1);
}

#[test]
fn test_search_refuses_finished_and_full_games() {
    let mut engine = SearchEngine::with_seed(0);
    let mut session = GameSession::new(3, 3, Mark::X).unwrap();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(
        session.choose_move(Tier::Random, &mut engine),
        Err(EngineError::IllegalMove(IllegalMove::GameOver))
    );
}
