//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Outcome};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

/// Derives the outcome of a board, or `None` while the game can continue.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(line) = winning_line(board) {
        Some(Outcome::Winner(line.player))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
