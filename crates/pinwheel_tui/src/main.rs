//! Pinwheel - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use pinwheel_tictactoe::Difficulty;
use pinwheel_tui::{Cli, Command, GameConfig, logging, run_lobby, simulate};
use std::path::PathBuf;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            difficulty,
            seed,
        } => run_play(config, difficulty, seed).await,
        Command::Simulate {
            x,
            o,
            games,
            seed,
            json,
            paced,
        } => run_simulate(x, o, games, seed, json, paced).await,
    }
}

/// Runs the interactive game.
async fn run_play(
    config_path: PathBuf,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load(&config_path)?;
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    logging::init_file_logging(config.log_file())?;
    info!(config = %config_path.display(), "Starting Pinwheel");

    run_lobby(config).await
}

/// Plays AI-vs-AI games and prints the tally.
#[instrument]
async fn run_simulate(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
    paced: bool,
) -> Result<()> {
    logging::init_stderr_logging();

    let report = simulate(x, o, games, seed, paced).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
