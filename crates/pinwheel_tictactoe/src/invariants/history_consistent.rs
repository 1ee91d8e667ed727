//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Board, GameInProgress, Square};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board yields the
/// current board, and no square was played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut replayed = Board::new();
        for action in game.history() {
            if !replayed.is_empty(action.position) {
                return false;
            }
            replayed.set(action.position, Square::Occupied(action.player));
        }
        &replayed == game.board()
    }

    fn description() -> &'static str {
        "Board matches the move history"
    }
}
