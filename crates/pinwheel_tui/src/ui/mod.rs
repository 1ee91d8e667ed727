//! Rendering helpers shared by the screens.

mod board;
mod menu;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardGeometry, BoardView, draw_board};
pub use menu::{Menu, draw_chrome};
