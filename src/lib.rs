//! Tic-tac-toe engine with difficulty-tiered AI.
//!
//! The core is the game-outcome evaluator and the AI move-selection
//! engine; everything a front end needs is exposed through a handful of
//! seams:
//!
//! - **Board state**: [`Board`], [`Position`], [`Square`], [`Player`]
//! - **Outcome evaluation**: [`evaluate`] ([`GameStatus`] is derived,
//!   never stored)
//! - **AI**: [`AiEngine`] dispatching on [`Difficulty`], from random
//!   moves up to unbeatable minimax with alpha-beta pruning
//!   ([`best_move`])
//! - **Session**: [`GameSession`] owning board, turn, and difficulty
//! - **Front-end callbacks**: [`GameObserver`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{AiEngine, Difficulty, GameSession, Position};
//!
//! let mut session = GameSession::new();
//! session.set_difficulty(Difficulty::Impossible);
//! let mut engine = AiEngine::new();
//!
//! session.apply_move(Position::TopLeft)?;
//! let reply = session.ai_move(&mut engine)?.expect("AI is active");
//! assert_eq!(reply.position, Position::Center);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod observer;
mod position;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use ai::{AiEngine, Difficulty, best_move};
pub use observer::GameObserver;
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full};
pub use session::GameSession;
pub use types::{Board, GameStatus, Player, Square};
