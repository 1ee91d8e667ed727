//! Result screen: headline, final board, rematch or start over.

use crossterm::event::{KeyCode, KeyEvent};
use pinwheel_tictactoe::{Board, Outcome, Session, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use std::time::Instant;
use tracing::{debug, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::ui::{BOARD_HEIGHT, BoardGeometry, BoardView, Menu, draw_board, draw_chrome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultOption {
    PlayAgain,
    StartOver,
}

impl ResultOption {
    fn label(self) -> String {
        match self {
            Self::PlayAgain => "Play Again".to_string(),
            Self::StartOver => "Start Over".to_string(),
        }
    }
}

/// State for the result screen.
#[derive(Debug)]
pub struct ResultScreen {
    outcome: Outcome,
    board: Board,
    menu: Menu<ResultOption>,
}

impl ResultScreen {
    /// Creates the screen for a concluded game.
    #[instrument]
    pub fn new(outcome: Outcome, board: Board) -> Self {
        debug!("Initializing ResultScreen");
        Self {
            outcome,
            board,
            menu: Menu::new(vec![ResultOption::PlayAgain, ResultOption::StartOver]),
        }
    }
}

impl Screen for ResultScreen {
    fn render(&self, frame: &mut Frame, _session: &Session, _now: Instant) {
        let body = draw_chrome(
            frame,
            "Game Over",
            "↑↓: Navigate | Enter: Select | Esc: Start Over | q: Quit",
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(4),
            ])
            .split(body);

        let color = match self.outcome.winner() {
            Some(_) => Color::Green,
            None => Color::Yellow,
        };
        let headline = Paragraph::new(self.outcome.headline())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[0]);

        let mut view = BoardView::still(&self.board);
        if let Some(line) = rules::winning_line(&self.board) {
            for i in line.indices() {
                view.win_cells[i] = true;
            }
        }
        draw_board(frame, &BoardGeometry::centered_in(chunks[1]), &view);

        self.menu.render(frame, chunks[2], "", ResultOption::label);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.menu.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.menu.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.menu.selected() {
                Some(ResultOption::PlayAgain) => ScreenTransition::PlayAgain,
                Some(ResultOption::StartOver) => ScreenTransition::StartOver,
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc => ScreenTransition::StartOver,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
