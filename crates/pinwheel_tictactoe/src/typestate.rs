//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own type with phase-specific fields. A `GameFinished`
//! always has an outcome, and only a `GameInProgress` can accept moves.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, WinLine};
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start with an empty board.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game. X always moves first.
    pub fn start(self) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: Player::X,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        if let Some(outcome) = rules::outcome(&game.board) {
            debug!(%outcome, "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                winning_line: rules::winning_line(&game.board),
                board: game.board,
                history: game.history,
                outcome,
            }));
        }

        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Places the current player's mark at `position`.
    pub fn place(self, position: Position) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from the initial state.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for (i, action) in moves.iter().enumerate() {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) if i + 1 == moves.len() => {
                    return Ok(GameResult::Finished(g));
                }
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
    winning_line: Option<WinLine>,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The completed triple, for won games.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
