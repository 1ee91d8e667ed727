//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game engine, the AI search and the invariants all
//! share one definition of "won" and "drawn".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, outcome};
pub use win::{LINES, WinLine, check_winner, winning_line};
