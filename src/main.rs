//! Terminal front end for the tic-tac-toe engine.
//!
//! This binary is the engine's external UI collaborator: it renders
//! moves and end-of-game messages through [`GameObserver`] and paces the
//! AI with a cosmetic delay that cannot affect move selection.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Cli;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tictactoe_engine::{
    AiEngine, Difficulty, GameObserver, GameSession, GameStatus, Move, MoveError, Player,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let difficulty: Difficulty = cli
        .difficulty
        .parse()
        .with_context(|| format!("Unknown difficulty '{}'", cli.difficulty))?;

    info!(%difficulty, seed = ?cli.seed, "Starting terminal game");

    let mut engine = match cli.seed {
        Some(seed) => AiEngine::seeded(seed),
        None => AiEngine::new(),
    };
    let mut session = GameSession::new();
    session.set_difficulty(difficulty);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        play_game(&mut session, &mut engine, &mut input, cli.delay_ms)?;
        if !prompt_yes_no(&mut input, "Play again? [y/N] ")? {
            break;
        }
        session.reset();
    }

    Ok(())
}

/// Renders committed moves and the final outcome to the terminal.
struct TerminalObserver;

impl GameObserver for TerminalObserver {
    fn mark_placed(&mut self, mv: Move) {
        println!("Player {} plays {}.", mv.player, mv.position.label());
    }

    fn game_over(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(player) => println!("Player {} wins!", player),
            GameStatus::Draw => println!("It's a tie. Nobody wins!"),
            GameStatus::InProgress => {}
        }
    }
}

/// Runs one game to completion.
///
/// Human input is only read on human turns, so no input can sneak in
/// while an AI move is pending.
fn play_game(
    session: &mut GameSession,
    engine: &mut AiEngine,
    input: &mut impl BufRead,
    delay_ms: u64,
) -> Result<()> {
    let mut observer = TerminalObserver;

    loop {
        println!("\n{}\n", session.board().display());
        if session.status() != GameStatus::InProgress {
            break;
        }

        let ai_turn =
            session.difficulty() != Difficulty::None && session.current_player() == Player::O;

        if ai_turn {
            println!("AI is thinking...");
            // Cosmetic pacing only; the move is selected after the pause.
            thread::sleep(Duration::from_millis(delay_ms));
            session.ai_move_with(engine, &mut observer)?;
        } else {
            human_turn(session, input, &mut observer)?;
        }
    }

    Ok(())
}

/// Prompts until the current player enters a legal move.
fn human_turn(
    session: &mut GameSession,
    input: &mut impl BufRead,
    observer: &mut TerminalObserver,
) -> Result<()> {
    loop {
        let prompt = format!(
            "Player {}, choose a square (1-9 or a label like 'center'): ",
            session.current_player()
        );
        let line = read_line(input, &prompt)?;

        let Some(position) = cli::parse_square(&line) else {
            println!("Didn't recognize '{}'.", line.trim());
            continue;
        };

        match session.apply_move_with(position, observer) {
            Ok(_) => return Ok(()),
            Err(err @ MoveError::SquareOccupied(_)) => {
                // Non-fatal: re-prompt.
                debug!(%err, "Move rejected");
                println!("{}.", err);
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    let line = read_line(input, prompt)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed");
    }
    Ok(line)
}
