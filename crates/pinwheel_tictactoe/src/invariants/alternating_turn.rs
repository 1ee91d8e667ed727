//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameInProgress, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
