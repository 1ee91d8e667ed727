//! Serializable game wrapper for typestate phases.

use super::action::{Move, MoveError};
use super::rules::WinLine;
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A game in any phase.
///
/// Callers that hold a game across UI events (the session, the
/// orchestrator) keep it in this enum and let [`AnyGame::place`] drive
/// the typestate transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress(GameInProgress),
    /// Game over.
    Finished(GameFinished),
}

impl Default for AnyGame {
    fn default() -> Self {
        AnyGame::new()
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// A fresh game with X to move.
    pub fn new() -> Self {
        GameSetup::new().start().into()
    }

    /// Places the mark of the side to move.
    #[instrument(skip(self))]
    pub fn place(self, position: Position) -> Result<Self, MoveError> {
        match self {
            AnyGame::InProgress(game) => game.place(position).map(Into::into),
            AnyGame::Finished(_) => Err(MoveError::GameOver),
        }
    }

    /// Applies an explicit move, checking it is that player's turn.
    pub fn make_move(self, action: Move) -> Result<Self, MoveError> {
        match self {
            AnyGame::InProgress(game) => game.make_move(action).map(Into::into),
            AnyGame::Finished(_) => Err(MoveError::GameOver),
        }
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress(g) => g.board(),
            AnyGame::Finished(g) => g.board(),
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::InProgress(g) => g.history(),
            AnyGame::Finished(g) => g.history(),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns the current player to move, if game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress(g) => Some(g.to_move()),
            AnyGame::Finished(_) => None,
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(g) => Some(*g.outcome()),
        }
    }

    /// Returns the winner, if game is won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    /// The completed triple, if the game was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(g) => g.winning_line(),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress(g) => format!("In progress. Player {} to move.", g.to_move()),
            AnyGame::Finished(g) => match g.outcome() {
                Outcome::Winner(player) => format!("Game over. Player {} wins!", player),
                Outcome::Draw => "Game over. Draw!".to_string(),
            },
        }
    }
}
