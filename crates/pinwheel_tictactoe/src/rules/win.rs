//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the player holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The three positions, in enumeration order.
    pub positions: [Position; 3],
    /// The player occupying all three.
    pub player: Player,
}

impl WinLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns the first uniformly occupied triple in [`LINES`] order.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(WinLine {
                positions: [a, b, c],
                player,
            }),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}
