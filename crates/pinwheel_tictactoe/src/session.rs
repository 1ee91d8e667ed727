//! Screen-to-screen session flow.
//!
//! ```text
//! ModeSelect ──single──▶ DifficultySelect ──pick──▶ Playing ──conclude──▶ Result
//!     ▲        ──multi───────────────────────────────▶  │                    │
//!     └──────────────────────── back / start_over ◀─────┴────────────────────┘
//! ```
//!
//! The session owns the board while a game is played and hands the derived
//! outcome to the result stage. Requests that do not fit the current stage
//! are ignored rather than reported, matching how a stray tap behaves.

use super::ai::{self, Difficulty};
use super::{AnyGame, Board, Outcome, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The mark played by the scripted opponent in single-player mode.
pub const AI_MARK: Player = Player::O;

/// How the two sides are controlled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMode {
    /// Human plays X against the scripted O.
    #[default]
    SinglePlayer,
    /// Two humans share the board.
    Multiplayer,
}

impl PlayerMode {
    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            PlayerMode::SinglePlayer => "Single Player",
            PlayerMode::Multiplayer => "Multiplayer",
        }
    }
}

/// Current screen of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Choosing single player or multiplayer.
    #[default]
    ModeSelect,
    /// Choosing the opponent's difficulty (single player only).
    DifficultySelect,
    /// A game is on the board.
    Playing(AnyGame),
    /// The game is over and its outcome is shown.
    Result {
        /// Derived outcome of the finished game.
        outcome: Outcome,
        /// Final board, kept for display.
        board: Board,
    },
}

/// A player's session, from mode selection to the result screen and back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    mode: PlayerMode,
    difficulty: Difficulty,
    stage: Stage,
}

impl Session {
    /// Starts at mode selection with the given default difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            mode: PlayerMode::default(),
            difficulty,
            stage: Stage::ModeSelect,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Selected player mode.
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    /// Selected difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The game being played, if any.
    pub fn game(&self) -> Option<&AnyGame> {
        match &self.stage {
            Stage::Playing(game) => Some(game),
            _ => None,
        }
    }

    /// Selects the player mode. Single player continues to difficulty
    /// selection, multiplayer starts a game immediately.
    #[instrument(skip(self))]
    pub fn choose_mode(&mut self, mode: PlayerMode) -> bool {
        if self.stage != Stage::ModeSelect {
            debug!(stage = ?self.stage, "Mode choice ignored outside mode select");
            return false;
        }
        self.mode = mode;
        self.stage = match mode {
            PlayerMode::SinglePlayer => Stage::DifficultySelect,
            PlayerMode::Multiplayer => Stage::Playing(AnyGame::new()),
        };
        info!(mode = mode.label(), "Mode selected");
        true
    }

    /// Locks in the difficulty and starts a game.
    #[instrument(skip(self))]
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.stage != Stage::DifficultySelect {
            debug!("Difficulty choice ignored outside difficulty select");
            return false;
        }
        self.difficulty = difficulty;
        self.stage = Stage::Playing(AnyGame::new());
        info!(difficulty = difficulty.label(), "Difficulty selected, game started");
        true
    }

    /// Returns to mode selection, discarding any game on the board.
    #[instrument(skip(self))]
    pub fn back(&mut self) -> bool {
        if self.stage == Stage::ModeSelect {
            return false;
        }
        if let Stage::Playing(game) = &self.stage {
            info!(moves = game.history().len(), "Abandoning game");
        }
        self.stage = Stage::ModeSelect;
        true
    }

    /// True when the scripted opponent should move next.
    pub fn awaiting_ai(&self) -> bool {
        self.mode == PlayerMode::SinglePlayer
            && self.game().and_then(AnyGame::to_move) == Some(AI_MARK)
    }

    /// Human move at `position`.
    ///
    /// Ignored (returns `false`) when not playing, when the game is over,
    /// when it is the AI's turn, or when the cell is occupied.
    #[instrument(skip(self))]
    pub fn tap(&mut self, position: Position) -> bool {
        if self.awaiting_ai() {
            debug!("Tap ignored during AI turn");
            return false;
        }
        self.place(position)
    }

    /// Lets the scripted opponent move. Returns the cell it filled.
    #[instrument(skip(self, rng))]
    pub fn play_ai_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if !self.awaiting_ai() {
            return None;
        }
        let board = *self.game()?.board();
        let position = ai::choose_move(&board, self.difficulty, AI_MARK, rng)?;
        self.place(position).then_some(position)
    }

    /// Moves a finished game to the result stage.
    #[instrument(skip(self))]
    pub fn conclude(&mut self) -> Option<Outcome> {
        let Stage::Playing(game) = &self.stage else {
            return None;
        };
        let outcome = game.outcome()?;
        let board = *game.board();
        info!(%outcome, "Game concluded");
        self.stage = Stage::Result { outcome, board };
        Some(outcome)
    }

    /// From the result screen, starts a new game with the same mode and
    /// difficulty.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> bool {
        if !matches!(self.stage, Stage::Result { .. }) {
            return false;
        }
        self.stage = Stage::Playing(AnyGame::new());
        true
    }

    /// From the result screen, returns to mode selection.
    pub fn start_over(&mut self) -> bool {
        if !matches!(self.stage, Stage::Result { .. }) {
            return false;
        }
        self.stage = Stage::ModeSelect;
        true
    }

    fn place(&mut self, position: Position) -> bool {
        let Stage::Playing(game) = &mut self.stage else {
            return false;
        };
        match game.clone().place(position) {
            Ok(next) => {
                *game = next;
                true
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }
}
