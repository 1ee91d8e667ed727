//! Screen trait and transition type for the lobby state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use pinwheel_tictactoe::{Difficulty, PlayerMode, Position, Session};
use ratatui::{Frame, layout::Rect};
use std::time::Instant;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::LobbyController), which forwards it to the
/// [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Pick single player or multiplayer.
    ChooseMode(PlayerMode),
    /// Pick the AI difficulty and start a game.
    ChooseDifficulty(Difficulty),
    /// Place a mark.
    Place(Position),
    /// Return to mode selection.
    Back,
    /// Rematch with the same mode and difficulty.
    PlayAgain,
    /// Return to mode selection from the result screen.
    StartOver,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own view state, renders its UI, and handles input.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session, now: Instant);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> ScreenTransition;

    /// Handles a mouse event; `area` is the whole terminal.
    fn handle_mouse(
        &mut self,
        _mouse: MouseEvent,
        _area: Rect,
        _session: &Session,
    ) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
