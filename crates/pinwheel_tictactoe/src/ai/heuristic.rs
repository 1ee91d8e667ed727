//! One-ply tactics: complete a line, or block the opponent's.

use super::super::rules::LINES;
use super::super::{Board, Player, Position, Square};

/// First line (in [`LINES`] order) where `mark` holds two squares and the
/// third is empty; returns that empty square.
pub fn completing_move(board: &Board, mark: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(mark))
            .count();
        let empty = line.iter().copied().find(|&pos| board.is_empty(pos));
        if owned == 2 { empty } else { None }
    })
}

/// Win this turn if possible, otherwise block the opponent's win.
pub fn tactical_move(board: &Board, mark: Player) -> Option<Position> {
    completing_move(board, mark).or_else(|| completing_move(board, mark.opponent()))
}
