//! Mode selection screen, the first thing shown.

use crossterm::event::{KeyCode, KeyEvent};
use pinwheel_tictactoe::{PlayerMode, Session};
use ratatui::Frame;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::ui::{Menu, draw_chrome};

/// Menu options on the mode selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeOption {
    Play(PlayerMode),
    Quit,
}

impl ModeOption {
    fn label(self) -> String {
        match self {
            Self::Play(mode) => mode.label().to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// State for the mode selection screen.
#[derive(Debug)]
pub struct ModeSelectScreen {
    menu: Menu<ModeOption>,
}

impl ModeSelectScreen {
    /// Creates the screen, preselecting the last mode played.
    #[instrument]
    pub fn new(last_mode: PlayerMode) -> Self {
        debug!("Initializing ModeSelectScreen");
        let menu = Menu::new(vec![
            ModeOption::Play(PlayerMode::SinglePlayer),
            ModeOption::Play(PlayerMode::Multiplayer),
            ModeOption::Quit,
        ])
        .with_selected(ModeOption::Play(last_mode));
        Self { menu }
    }
}

impl Screen for ModeSelectScreen {
    fn render(&self, frame: &mut Frame, _session: &Session, _now: Instant) {
        let body = draw_chrome(
            frame,
            "Pinwheel Tic-Tac-Toe",
            "↑↓: Navigate | Enter: Select | q: Quit",
        );
        self.menu
            .render(frame, body, "Choose a mode", ModeOption::label);
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
                Some(ModeOption::Play(mode)) => {
                    info!(mode = mode.label(), "Mode chosen");
                    ScreenTransition::ChooseMode(mode)
                }
                Some(ModeOption::Quit) => ScreenTransition::Quit,
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
