//! The four lobby screens.

mod difficulty_select;
mod in_game;
mod mode_select;
mod result;

pub use difficulty_select::DifficultySelectScreen;
pub use in_game::{InGameScreen, turn_label};
pub use mode_select::ModeSelectScreen;
pub use result::ResultScreen;
