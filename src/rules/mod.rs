//! Outcome evaluation: win, draw, or still in progress.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board and returns its current status.
///
/// Win lines are checked before the draw condition, so a full board with
/// a three-in-a-row reports the win. This is a full stateless re-scan on
/// every call; with nine squares that is O(1) and keeps the evaluator a
/// total function over well-formed boards.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}
