//! Minimax search with alpha-beta pruning.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Score for a win at depth zero. Terminal scores shrink toward zero as
/// depth grows, so the search prefers faster wins and slower losses.
const WIN_SCORE: i32 = 100;

/// Returns the minimax-optimal position for `ai` to play.
///
/// Runs one level of search for every empty position in ascending index
/// order and keeps the first-found maximum, so score ties break toward
/// the lowest index. The board is mutated in place during exploration
/// and every placement is paired with an undo, leaving the board exactly
/// as it was found.
///
/// Returns `None` only when the board has no empty positions; callers
/// are expected to check for a terminal state first.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, ai: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in board.empty_positions() {
        board.set(pos, Square::Occupied(ai));
        let score = minimax(board, ai, 0, i32::MIN, i32::MAX, false);
        board.set(pos, Square::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = ?pos, score, "Selected minimax move");
    }
    best.map(|(pos, _)| pos)
}

/// Scores the position reachable from the current board state.
///
/// `maximizing` is true when `ai` is about to move. Alpha tracks the
/// best score the maximizer can guarantee, beta the best the minimizer
/// can; siblings are pruned as soon as `alpha >= beta`.
fn minimax(
    board: &mut Board,
    ai: Player,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    match rules::evaluate(board) {
        GameStatus::Won(winner) if winner == ai => return WIN_SCORE - depth,
        GameStatus::Won(_) => return -WIN_SCORE + depth,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_positions() {
        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, ai, depth + 1, alpha, beta, !maximizing);
        board.set(pos, Square::Empty);

        if maximizing {
            best_score = best_score.max(score);
            alpha = alpha.max(best_score);
        } else {
            best_score = best_score.min(score);
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            break;
        }
    }

    best_score
}
