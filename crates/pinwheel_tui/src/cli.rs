//! Command-line interface for pinwheel.

use clap::{Parser, Subcommand};
use pinwheel_tictactoe::Difficulty;
use std::path::PathBuf;

/// Default location of the TOML config file.
pub const DEFAULT_CONFIG_PATH: &str = "pinwheel.toml";

/// Pinwheel - tic-tac-toe against a scripted opponent or a friend
#[derive(Parser, Debug)]
#[command(name = "pinwheel")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (missing file means defaults)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Preselected AI difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play AI against AI without a UI and report the results
    Simulate {
        /// Difficulty of the X player
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of the O player
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Base seed; game `i` uses `seed + i`
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Wait each AI's thinking delay before it moves
        #[arg(long)]
        paced: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            difficulty: None,
            seed: None,
        }
    }
}
