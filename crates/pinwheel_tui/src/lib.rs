//! Terminal front end for Pinwheel tic-tac-toe.
//!
//! - **Lobby**: mode select, difficulty select, game and result screens
//!   driven by a [`pinwheel_tictactoe::Session`]
//! - **Pacing**: AI thinking delays and the scanning highlight
//! - **Animation**: mark fade-in and winning-line sweep
//! - **Orchestrator**: headless AI-vs-AI games for `pinwheel simulate`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod animation;
pub mod cli;
pub mod config;
pub mod input;
pub mod lobby;
pub mod logging;
pub mod orchestrator;
pub mod pacing;
pub mod players;
pub mod simulation;
pub mod ui;

pub use animation::{Pulse, Timings, Tween, fast_out_slow_in};
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use lobby::{LobbyController, Screen, ScreenTransition, run_lobby};
pub use orchestrator::{GameEvent, Orchestrator};
pub use pacing::ThinkingPlan;
pub use players::{AiPlayer, Player};
pub use simulation::{GameRecord, SimulationReport, simulate};
pub use ui::BoardGeometry;
