//! Player trait and implementations.

mod ai;

pub use ai::AiPlayer;

use anyhow::Result;
use pinwheel_tictactoe::{AnyGame, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move for the side to move in `game`.
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
