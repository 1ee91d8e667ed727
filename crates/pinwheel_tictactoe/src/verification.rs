//! Kani proof harnesses for the rules.

use super::rules::{self, LINES};
use super::{Board, Outcome, Player, Position, Square};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_squares(kani::any())
    }
}

#[kani::proof]
fn winning_line_is_uniform_and_first() {
    let board: Board = kani::any();
    if let Some(line) = rules::winning_line(&board) {
        for pos in line.positions {
            kani::assert(
                board.get(pos) == Square::Occupied(line.player),
                "line squares belong to the winner",
            );
        }
        let first = LINES
            .iter()
            .position(|l| *l == line.positions)
            .unwrap_or(LINES.len());
        for earlier in &LINES[..first] {
            let [a, b, c] = *earlier;
            let sq = board.get(a);
            kani::assert(
                sq == Square::Empty || sq != board.get(b) || sq != board.get(c),
                "no earlier line is complete",
            );
        }
    }
}

#[kani::proof]
fn draw_means_full_without_line() {
    let board: Board = kani::any();
    if rules::outcome(&board) == Some(Outcome::Draw) {
        kani::assert(
            Position::ALL.iter().all(|&p| !board.is_empty(p)),
            "draw board is full",
        );
        kani::assert(rules::winning_line(&board).is_none(), "draw has no line");
    }
}
