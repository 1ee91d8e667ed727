//! Scripted opponents.
//!
//! [`choose_move`] is the single entry point: given a board, a difficulty
//! and the mark to play, it returns the cell to fill, or `None` when the
//! board has no empty cell.

mod difficulty;
mod heuristic;
mod minimax;

pub use difficulty::Difficulty;
pub use heuristic::{completing_move, tactical_move};
pub use minimax::{best_move, minimax_score};

use super::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a move for `mark` at the given difficulty.
#[instrument(skip(board, rng), fields(empty = board.empty_positions().count()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    mark: Player,
    rng: &mut R,
) -> Option<Position> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            tactical_move(board, mark).or_else(|| random_move(board, rng))
        }
        Difficulty::Hard => best_move(board, mark).or_else(|| random_move(board, rng)),
    };
    debug!(?choice, "AI chose position");
    choice
}

/// Uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empties = Position::valid_moves(board);
    empties.choose(rng).copied()
}
