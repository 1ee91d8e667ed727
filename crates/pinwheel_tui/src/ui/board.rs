//! Tic-tac-toe board rendering and mouse hit testing.

use pinwheel_tictactoe::{Board, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const X_COLOR: (u8, u8, u8) = (66, 135, 245);
const O_COLOR: (u8, u8, u8) = (235, 64, 52);
const FADED: (u8, u8, u8) = (60, 60, 60);
const CURSOR_BG: Color = Color::Rgb(70, 70, 90);
const FOCUS_BG: (u8, u8, u8) = (40, 60, 110);
const WIN_BG: Color = Color::Rgb(40, 110, 60);

/// Where the grid sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    area: Rect,
}

impl BoardGeometry {
    /// Centers the grid in `area`, clipping it if `area` is too small.
    pub fn centered_in(area: Rect) -> Self {
        let width = BOARD_WIDTH.min(area.width);
        let height = BOARD_HEIGHT.min(area.height);
        Self {
            area: Rect::new(
                area.x + (area.width - width) / 2,
                area.y + (area.height - height) / 2,
                width,
                height,
            ),
        }
    }

    /// Screen rectangle of the grid.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen rectangle of one cell, clipped to the grid.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let x = self.area.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = self.area.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(self.area)
    }

    /// Maps a terminal cell to a board position.
    ///
    /// Points outside the grid give `None`; a separator belongs to the cell
    /// on its left (or above it).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let inside = column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        if !inside {
            return None;
        }
        let col = ((column - self.area.x) / (CELL_WIDTH + 1)).min(2);
        let row = ((row - self.area.y) / (CELL_HEIGHT + 1)).min(2);
        Position::from_row_col(row as usize, col as usize)
    }
}

/// Everything needed to draw one frame of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardView<'a> {
    /// Marks to draw.
    pub board: &'a Board,
    /// Keyboard cursor, if the player can move.
    pub cursor: Option<Position>,
    /// AI scanning highlight.
    pub focus: Option<Position>,
    /// Brightness of the scanning highlight, `0.0..=1.0`.
    pub focus_level: f32,
    /// Fade-in progress per cell, `0.0..=1.0`.
    pub mark_progress: [f32; 9],
    /// Cells already reached by the winning-line sweep.
    pub win_cells: [bool; 9],
}

impl<'a> BoardView<'a> {
    /// A still board: marks fully drawn, no highlights.
    pub fn still(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            focus: None,
            focus_level: 1.0,
            mark_progress: [1.0; 9],
            win_cells: [false; 9],
        }
    }
}

/// Draws the grid and its cells.
pub fn draw_board(frame: &mut Frame, geometry: &BoardGeometry, view: &BoardView) {
    let grid: Vec<Line> = (0..BOARD_HEIGHT)
        .map(|row| {
            if row % (CELL_HEIGHT + 1) == CELL_HEIGHT {
                let bar = "─".repeat(CELL_WIDTH as usize);
                Line::from(format!("{bar}┼{bar}┼{bar}"))
            } else {
                let gap = " ".repeat(CELL_WIDTH as usize);
                Line::from(format!("{gap}│{gap}│{gap}"))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(grid).style(Style::default().fg(Color::DarkGray)),
        geometry.area(),
    );

    for pos in Position::ALL {
        draw_cell(frame, geometry.cell_rect(pos), view, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView, pos: Position) {
    let i = pos.to_index();
    let (lines, fg) = match view.board.get(pos) {
        Square::Empty => (
            vec![String::new(), (i + 1).to_string(), String::new()],
            Color::DarkGray,
        ),
        Square::Occupied(player) => (
            glyph(player).iter().map(|s| s.to_string()).collect(),
            mark_color(player, view.mark_progress[i]),
        ),
    };

    let mut style = Style::default().fg(fg);
    if view.board.get(pos) != Square::Empty {
        style = style.add_modifier(Modifier::BOLD);
    }
    if view.win_cells[i] {
        style = style.bg(WIN_BG);
    } else if view.focus == Some(pos) {
        style = style.bg(focus_color(view.focus_level));
    } else if view.cursor == Some(pos) {
        style = style.bg(CURSOR_BG);
    }

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        area,
    );
}

fn glyph(player: Player) -> [&'static str; 3] {
    match player {
        Player::X => ["╲ ╱", " ╳ ", "╱ ╲"],
        Player::O => ["╭─╮", "│ │", "╰─╯"],
    }
}

/// Mark color at a point of its fade-in.
fn mark_color(player: Player, progress: f32) -> Color {
    let target = match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    };
    let p = progress.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| (from as f32 + (to as f32 - from as f32) * p).round() as u8;
    Color::Rgb(
        mix(FADED.0, target.0),
        mix(FADED.1, target.1),
        mix(FADED.2, target.2),
    )
}

/// Scanning highlight dimmed to `level`.
fn focus_color(level: f32) -> Color {
    let l = level.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * l).round() as u8;
    Color::Rgb(scale(FOCUS_BG.0), scale(FOCUS_BG.1), scale(FOCUS_BG.2))
}
