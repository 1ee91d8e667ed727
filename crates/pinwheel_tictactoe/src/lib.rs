//! Pure tic-tac-toe game logic.
//!
//! - **Rules**: win-line and draw detection over a 9-cell board
//! - **Game**: typestate engine with contract-checked moves
//! - **AI**: random, win/block heuristic, and exhaustive minimax opponents
//! - **Session**: mode select → difficulty select → game → result flow
//!
//! # Example
//!
//! ```
//! use pinwheel_tictactoe::{Board, Player, Position, rules};
//!
//! let board: Board = "XXX|OO_|___".parse().unwrap();
//! let line = rules::winning_line(&board).unwrap();
//! assert_eq!(line.player, Player::X);
//! assert_eq!(line.positions, [Position::TopLeft, Position::TopCenter, Position::TopRight]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod contracts;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
pub mod session;
mod types;
mod typestate;
mod wrapper;

#[cfg(kani)]
mod verification;

pub use action::{Move, MoveError};
pub use ai::{Difficulty, choose_move};
pub use contracts::{Contract, MoveContract, PlayersTurn, SquareIsEmpty};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::WinLine;
pub use session::{AI_MARK, PlayerMode, Session, Stage};
pub use types::{Board, BoardParseError, Player, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use wrapper::AnyGame;

/// Alias for clarity in UI code.
pub type Mark = Player;
