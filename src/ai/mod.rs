//! AI move selection at four difficulty tiers.

mod minimax;

pub use minimax::best_move;

use crate::position::Position;
use crate::types::{Board, Player};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI difficulty selected for a game session.
///
/// A single tagged enum, so two tiers can never be active at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// No AI: player versus player.
    #[default]
    None,
    /// Uniformly random moves, no lookahead.
    Easy,
    /// Plays the optimal move on a 0-99 roll at or below 45, otherwise
    /// random.
    Medium,
    /// Plays the optimal move on a 0-99 roll at or below 65, otherwise
    /// random.
    Hard,
    /// Always plays the optimal move. Unbeatable by construction.
    Impossible,
}

/// Move selector driven by the active [`Difficulty`].
///
/// Owns the RNG used by the Easy tier and the Medium/Hard rolls, so a
/// seeded engine replays the same game.
#[derive(Debug)]
pub struct AiEngine {
    rng: StdRng,
}

impl AiEngine {
    /// Creates an engine seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an engine with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a move for `mark` at the given difficulty.
    ///
    /// Returns `None` when the difficulty is [`Difficulty::None`] or the
    /// board has no empty squares. The board is borrowed mutably because
    /// the minimax tiers explore it in place; it is always restored
    /// before returning.
    #[instrument(skip(self, board))]
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        mark: Player,
        difficulty: Difficulty,
    ) -> Option<Position> {
        match difficulty {
            Difficulty::None => None,
            Difficulty::Easy => self.random_move(board),
            Difficulty::Medium => self.weighted_move(board, mark, 45),
            Difficulty::Hard => self.weighted_move(board, mark, 65),
            Difficulty::Impossible => minimax::best_move(board, mark),
        }
    }

    /// Samples uniformly random positions until an empty one hits.
    ///
    /// Rejection sampling over nine cells; with one empty square left
    /// this still converges, it just rejects more often.
    fn random_move(&mut self, board: &Board) -> Option<Position> {
        if board.empty_positions().is_empty() {
            return None;
        }

        loop {
            let pos = Position::ALL[self.rng.random_range(0..9)];
            if board.is_empty(pos) {
                debug!(position = ?pos, "Selected random move");
                return Some(pos);
            }
        }
    }

    /// Rolls a uniform integer in 0-99 once; at or below `threshold`
    /// plays the minimax-optimal move, otherwise falls back to the Easy
    /// tier.
    fn weighted_move(
        &mut self,
        board: &mut Board,
        mark: Player,
        threshold: u32,
    ) -> Option<Position> {
        let roll = self.rng.random_range(0..100);
        if roll <= threshold {
            minimax::best_move(board, mark)
        } else {
            self.random_move(board)
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
