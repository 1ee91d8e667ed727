//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use pinwheel_tictactoe::{AnyGame, Mark, Outcome, Position};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator to whoever is watching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A player was asked for a move.
    Thinking {
        /// Side to move.
        mark: Mark,
        /// Player name.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Side that moved.
        mark: Mark,
        /// Player name.
        player: String,
        /// Cell filled.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Winner or draw.
        outcome: Outcome,
        /// Cell indices of the winning line.
        winning_line: Option<[usize; 3]>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: AnyGame,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: AnyGame::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");

        loop {
            if let Some(outcome) = self.game.outcome() {
                info!(%outcome, "Game over");
                self.event_tx.send(GameEvent::GameOver {
                    outcome,
                    winning_line: self.game.winning_line().map(|line| line.indices()),
                })?;
                return Ok(outcome);
            }

            let Some(mark) = self.game.to_move() else {
                anyhow::bail!("Game not over but no side to move");
            };
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = player.name().to_string();

            self.event_tx.send(GameEvent::Thinking {
                mark,
                player: name.clone(),
            })?;

            debug!(player = %name, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            // AnyGame handles typestate transitions
            self.game = self
                .game
                .clone()
                .place(position)
                .map_err(|e| anyhow::anyhow!("{} played an illegal move: {}", name, e))?;

            self.event_tx.send(GameEvent::MoveMade {
                mark,
                player: name,
                position,
            })?;
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game = AnyGame::new();
    }
}
