//! Exhaustive minimax over the remaining game tree.
//!
//! At most 9 plies with branching factor at most 9, so the full tree is
//! searched without pruning. Scores are from X's point of view: +1 X wins,
//! -1 O wins, 0 draw. X maximises, O minimises.

use super::super::rules;
use super::super::{Board, Outcome, Player, Position};
use tracing::instrument;

fn terminal_score(outcome: Outcome) -> i8 {
    match outcome {
        Outcome::Winner(Player::X) => 1,
        Outcome::Winner(Player::O) => -1,
        Outcome::Draw => 0,
    }
}

/// Value of `board` with `to_move` on turn, under optimal play.
pub fn minimax_score(board: &Board, to_move: Player) -> i8 {
    if let Some(outcome) = rules::outcome(board) {
        return terminal_score(outcome);
    }
    let scores = board
        .empty_positions()
        .map(|pos| minimax_score(&board.with(pos, to_move), to_move.opponent()));
    let best = match to_move {
        Player::X => scores.max(),
        Player::O => scores.min(),
    };
    best.unwrap_or(0)
}

/// Optimal move for `mark`.
///
/// Among equally scored moves the first in ascending cell order wins.
/// Returns `None` when the board is already decided or full.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Player) -> Option<Position> {
    if rules::outcome(board).is_some() {
        return None;
    }
    let mut best: Option<(Position, i8)> = None;
    for pos in board.empty_positions() {
        let score = minimax_score(&board.with(pos, mark), mark.opponent());
        let better = match (best, mark) {
            (None, _) => true,
            (Some((_, top)), Player::X) => score > top,
            (Some((_, top)), Player::O) => score < top,
        };
        if better {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_score(&Board::new(), Player::X), 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO_|XX_|X__".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_diagonal_threat() {
        // X threatens 2-4-6; every move but the block loses.
        let board: Board = "O_X|_X_|___".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Some(Position::BottomLeft));
    }

    #[test]
    fn test_ties_go_to_lowest_cell() {
        // Every opening draws, so the first empty cell wins the tie.
        assert_eq!(best_move(&Board::new(), Player::X), Some(Position::TopLeft));

        // Corners all draw against a centre opening; edges lose.
        let board: Board = "___|_X_|___".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Some(Position::TopLeft));
    }

    #[test]
    fn test_decided_board_has_no_best_move() {
        let board: Board = "XXX|OO_|___".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), None);
    }

    #[test]
    fn test_forced_win_is_scored() {
        // X to move; O's column threat at 0 is already blocked.
        let board: Board = "XX_|O__|O__".parse().unwrap();
        assert_eq!(minimax_score(&board, Player::X), 1);
        assert_eq!(best_move(&board, Player::X), Some(Position::TopRight));
    }
}
