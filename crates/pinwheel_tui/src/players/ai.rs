//! Scripted opponent as a [`Player`].

use super::Player;
use anyhow::Result;
use pinwheel_tictactoe::{AnyGame, Difficulty, Position, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Plays whichever side is to move at a fixed difficulty.
#[derive(Debug)]
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
    pacing: bool,
}

impl AiPlayer {
    /// Creates an AI that answers instantly.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: name.into(),
            difficulty,
            rng: StdRng::seed_from_u64(seed),
            pacing: false,
        }
    }

    /// Waits the difficulty's thinking delay before each move.
    pub fn with_pacing(mut self, pacing: bool) -> Self {
        self.pacing = pacing;
        self
    }

    /// The AI's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, difficulty = %self.difficulty))]
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position> {
        let Some(mark) = game.to_move() else {
            anyhow::bail!("Game is over");
        };

        if self.pacing {
            let delay = self.difficulty.thinking_delay(&mut self.rng);
            tokio::time::sleep(delay).await;
        }

        let position = choose_move(game.board(), self.difficulty, mark, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(%position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
