//! Outcome of a finished game.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
///
/// Always derived from a board (see [`crate::rules::outcome`]), never
/// tracked on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Headline shown on the result screen.
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::Winner(Player::X) => "X Wins!",
            Outcome::Winner(Player::O) => "O Wins!",
            Outcome::Draw => "It's a Draw!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
