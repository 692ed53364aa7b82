//! Command-line interface for the terminal front end.

use clap::Parser;
use strum::IntoEnumIterator;
use tictactoe_engine::Position;

/// Tic-tac-toe in the terminal, with an optional AI opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Play tic-tac-toe against a difficulty-tiered AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AI difficulty: none (player vs player), easy, medium, hard, or
    /// impossible
    #[arg(short, long, default_value = "impossible")]
    pub difficulty: String,

    /// Seed for the AI's random number generator (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cosmetic pause before the AI's move is shown, in milliseconds
    #[arg(long, default_value = "600")]
    pub delay_ms: u64,
}

/// Parses a square from user input: a 1-9 number as shown on the board,
/// or a position label like "center".
pub fn parse_square(input: &str) -> Option<Position> {
    let input = input.trim();

    if let Ok(number) = input.parse::<usize>() {
        if (1..=9).contains(&number) {
            return Position::from_index(number - 1);
        }
        return None;
    }

    let lower = input.to_lowercase();
    Position::iter().find(|pos| pos.label().to_lowercase() == lower)
}
