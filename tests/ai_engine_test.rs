//! Tests for the AI engine's optimal play guarantees.

use tictactoe_engine::{
    Board, GameStatus, Player, Position, Square, best_move, evaluate,
};

/// Plays X at `index` on an empty board and asks the AI for its reply.
fn ai_reply_to_opening(index: usize) -> Position {
    let mut board = Board::new();
    let pos = Position::from_index(index).unwrap();
    board.set(pos, Square::Occupied(Player::X));
    best_move(&mut board, Player::O).expect("board has empty squares")
}

#[test]
fn test_corner_opening_answered_with_center() {
    // The center is the unique non-losing reply to a corner opening.
    assert_eq!(ai_reply_to_opening(0), Position::Center);
}

#[test]
fn test_every_corner_opening_answered_with_center() {
    for corner in [0, 2, 6, 8] {
        assert_eq!(ai_reply_to_opening(corner), Position::Center);
    }
}

/// Walks every sequence of opponent (X) moves against the optimal AI (O)
/// and asserts X never wins. The AI is deterministic, so only the X
/// branches fan out.
fn assert_never_loses(board: &mut Board) {
    for x_pos in board.empty_positions() {
        board.set(x_pos, Square::Occupied(Player::X));

        match evaluate(board) {
            GameStatus::Won(winner) => {
                assert_ne!(
                    winner,
                    Player::X,
                    "X found a winning line against the optimal AI: {}",
                    board.display()
                );
            }
            GameStatus::Draw => {}
            GameStatus::InProgress => {
                let reply = best_move(board, Player::O).expect("non-terminal board");
                board.set(reply, Square::Occupied(Player::O));

                if evaluate(board) == GameStatus::InProgress {
                    assert_never_loses(board);
                }

                board.set(reply, Square::Empty);
            }
        }

        board.set(x_pos, Square::Empty);
    }
}

#[test]
fn test_impossible_ai_never_loses() {
    let mut board = Board::new();
    assert_never_loses(&mut board);
    // The exploration restores the board it was handed.
    assert_eq!(board, Board::new());
}

#[test]
fn test_fork_is_punished() {
    // X . . / . O . / . . X  is the classic double-corner fork attempt;
    // the optimal reply is an edge, never the third corner.
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));
    board.set(Position::BottomRight, Square::Occupied(Player::X));

    let reply = best_move(&mut board, Player::O).expect("non-terminal board");
    let corners = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    assert!(
        !corners.contains(&reply),
        "AI answered the fork with corner {:?}",
        reply
    );
}
