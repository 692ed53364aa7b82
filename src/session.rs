//! Game session state: board, turn, difficulty, and move application.

use crate::action::{Move, MoveError};
use crate::ai::{AiEngine, Difficulty};
use crate::observer::GameObserver;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game of tic-tac-toe.
///
/// Owns the board and the turn state that the original browser game kept
/// as module-level globals. Status is derived from the board on demand
/// via [`GameSession::status`], never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Player whose turn it is. X always starts.
    current_player: Player,
    /// Active AI difficulty. `None` means player versus player.
    difficulty: Difficulty,
    /// Number of committed moves since the last reset.
    move_count: u32,
    /// Moves committed so far, in order.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            difficulty: Difficulty::None,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the active AI difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number of moves committed since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the moves committed so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Computes the current game status from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Selects a difficulty and starts a new game.
    ///
    /// This is the canonical new-game reset: the board is cleared, X is
    /// restored as the starting player, and the move counter and history
    /// are zeroed.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Starting new game");
        self.difficulty = difficulty;
        self.reset();
    }

    /// Clears the board and turn state, keeping the selected difficulty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.move_count = 0;
        self.history.clear();
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the move is recorded and the turn passes to the other
    /// player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already terminal
    /// and [`MoveError::SquareOccupied`] if the square is taken. Both
    /// are no-ops: the board is untouched and the caller may re-prompt.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mv = Move::new(self.current_player, position);
        self.board
            .set(position, crate::types::Square::Occupied(mv.player));
        self.history.push(mv);
        self.move_count += 1;
        self.current_player = self.current_player.opponent();

        debug!(%mv, move_count = self.move_count, "Committed move");
        Ok(mv)
    }

    /// Places a move and notifies the observer.
    ///
    /// The observer's `game_over` hook fires at most once, on the move
    /// that makes the board terminal.
    pub fn apply_move_with<O: GameObserver>(
        &mut self,
        position: Position,
        observer: &mut O,
    ) -> Result<Move, MoveError> {
        let mv = self.apply_move(position)?;
        observer.mark_placed(mv);

        let status = self.status();
        if status != GameStatus::InProgress {
            observer.game_over(status);
        }
        Ok(mv)
    }

    /// Lets the AI engine take the current turn.
    ///
    /// Returns `Ok(None)` when no AI is active ([`Difficulty::None`]).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game is already terminal;
    /// invoking the AI on a finished board is a caller error surfaced as
    /// the same rejected-move error as a human move.
    #[instrument(skip(self, engine))]
    pub fn ai_move(&mut self, engine: &mut AiEngine) -> Result<Option<Move>, MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player;
        let difficulty = self.difficulty;
        let Some(position) = engine.choose_move(&mut self.board, mark, difficulty) else {
            return Ok(None);
        };

        self.apply_move(position).map(Some)
    }

    /// Lets the AI take the current turn and notifies the observer.
    pub fn ai_move_with<O: GameObserver>(
        &mut self,
        engine: &mut AiEngine,
        observer: &mut O,
    ) -> Result<Option<Move>, MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player;
        let difficulty = self.difficulty;
        let Some(position) = engine.choose_move(&mut self.board, mark, difficulty) else {
            return Ok(None);
        };

        self.apply_move_with(position, observer).map(Some)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
