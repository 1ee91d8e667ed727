//! Undecided board invariant: an in-progress game has no winning line and
//! at least one empty square.

use super::super::rules;
use super::super::GameInProgress;
use super::Invariant;

/// Invariant: a game that still accepts moves has no outcome yet.
///
/// Once a uniform triple exists the game must have moved to the finished
/// phase, so no further move can be accepted.
pub struct UndecidedBoardInvariant;

impl Invariant<GameInProgress> for UndecidedBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        rules::outcome(game.board()).is_none()
    }

    fn description() -> &'static str {
        "In-progress board has no winning line and is not full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSetup, Player, Position, Square};

    #[test]
    fn test_completed_line_violates() {
        let mut game = GameSetup::new().start();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            game.board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!UndecidedBoardInvariant::holds(&game));
    }
}
