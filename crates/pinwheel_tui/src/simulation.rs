//! Batches of headless AI-vs-AI games.

use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::AiPlayer;
use anyhow::Result;
use pinwheel_tictactoe::{Difficulty, Mark, Outcome};
use rand::Rng;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// Seed the game was played with.
    pub seed: u64,
    /// How it ended.
    pub outcome: Outcome,
    /// Cell indices in the order they were filled.
    pub moves: Vec<usize>,
}

/// Tally of a batch of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Difficulty playing X.
    pub x: Difficulty,
    /// Difficulty playing O.
    pub o: Difficulty,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Every game, in order.
    pub games: Vec<GameRecord>,
}

impl SimulationReport {
    fn new(x: Difficulty, o: Difficulty) -> Self {
        Self {
            x,
            o,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(game);
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games: X ({}) vs O ({})",
            self.games.len(),
            self.x,
            self.o
        )?;
        writeln!(f, "  X wins: {}", self.x_wins)?;
        writeln!(f, "  O wins: {}", self.o_wins)?;
        write!(f, "  Draws:  {}", self.draws)
    }
}

/// Plays `games` games between two AIs. Game `i` uses seed `seed + i`.
///
/// With `paced`, each AI waits its difficulty's thinking delay before moving.
#[instrument]
pub async fn simulate(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    paced: bool,
) -> Result<SimulationReport> {
    let base = seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(base_seed = base, "Starting simulation");

    let mut report = SimulationReport::new(x, o);
    for i in 0..games {
        let game_seed = base.wrapping_add(u64::from(i));
        report.record(play_one(x, o, game_seed, paced).await?);
    }
    Ok(report)
}

async fn play_one(x: Difficulty, o: Difficulty, seed: u64, paced: bool) -> Result<GameRecord> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let player_x = AiPlayer::new(format!("X ({})", x), x, seed).with_pacing(paced);
    let player_o =
        AiPlayer::new(format!("O ({})", o), o, seed.rotate_left(32)).with_pacing(paced);

    let outcome = Orchestrator::new(Box::new(player_x), Box::new(player_o), event_tx)
        .run()
        .await?;

    let mut moves = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        debug!(?event, "Game event");
        if let GameEvent::MoveMade { position, .. } = event {
            moves.push(position.to_index());
        }
    }

    Ok(GameRecord {
        seed,
        outcome,
        moves,
    })
}
