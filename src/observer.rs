//! Observer seam between the engine and its front end.

use crate::action::Move;
use crate::types::GameStatus;

/// Callbacks the engine invokes on its UI collaborator.
///
/// The engine is synchronous, so implementations should render and
/// return; any pacing (like an AI "thinking" delay) belongs in the front
/// end before the move is requested, where it cannot affect selection.
pub trait GameObserver {
    /// Called after a move is committed to the board.
    fn mark_placed(&mut self, mv: Move);

    /// Called once when the game reaches a terminal state, with the
    /// final outcome.
    fn game_over(&mut self, status: GameStatus);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiEngine, Difficulty};
    use crate::position::Position;
    use crate::session::GameSession;
    use crate::types::Player;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<Move>,
        endings: Vec<GameStatus>,
    }

    impl GameObserver for Recorder {
        fn mark_placed(&mut self, mv: Move) {
            self.moves.push(mv);
        }

        fn game_over(&mut self, status: GameStatus) {
            self.endings.push(status);
        }
    }

    #[test]
    fn test_observer_sees_each_committed_move() {
        let mut session = GameSession::new();
        let mut recorder = Recorder::default();

        session
            .apply_move_with(Position::Center, &mut recorder)
            .unwrap();
        session
            .apply_move_with(Position::TopLeft, &mut recorder)
            .unwrap();

        assert_eq!(recorder.moves.len(), 2);
        assert_eq!(recorder.moves[0].player, Player::X);
        assert_eq!(recorder.moves[1].player, Player::O);
        assert!(recorder.endings.is_empty());
    }

    #[test]
    fn test_observer_notified_once_on_game_over() {
        let mut session = GameSession::new();
        let mut recorder = Recorder::default();

        // X: 0, 1, 2 wins; O: 3, 4.
        for index in [0, 3, 1, 4, 2] {
            session
                .apply_move_with(Position::from_index(index).unwrap(), &mut recorder)
                .unwrap();
        }

        assert_eq!(recorder.endings, vec![GameStatus::Won(Player::X)]);
    }

    #[test]
    fn test_observer_sees_ai_moves() {
        let mut session = GameSession::new();
        session.set_difficulty(Difficulty::Impossible);
        let mut engine = AiEngine::seeded(5);
        let mut recorder = Recorder::default();

        session
            .apply_move_with(Position::TopLeft, &mut recorder)
            .unwrap();
        session.ai_move_with(&mut engine, &mut recorder).unwrap();

        assert_eq!(recorder.moves.len(), 2);
        assert_eq!(recorder.moves[1].player, Player::O);
    }
}
