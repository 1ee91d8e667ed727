//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side not on turn.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Contract for move actions.
///
/// Preconditions: square empty, mover on turn.
/// Postconditions: every invariant in [`GameInvariants`].
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    #[instrument(level = "trace", skip(game))]
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
