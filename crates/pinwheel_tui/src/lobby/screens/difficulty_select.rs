//! Difficulty selection screen (single player only).

use crossterm::event::{KeyCode, KeyEvent};
use pinwheel_tictactoe::{Difficulty, Session};
use ratatui::Frame;
use std::time::Instant;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::ui::{Menu, draw_chrome};

/// State for the difficulty selection screen.
#[derive(Debug)]
pub struct DifficultySelectScreen {
    menu: Menu<Difficulty>,
}

impl DifficultySelectScreen {
    /// Creates the screen with `current` highlighted.
    #[instrument]
    pub fn new(current: Difficulty) -> Self {
        debug!("Initializing DifficultySelectScreen");
        Self {
            menu: Menu::new(Difficulty::iter().collect()).with_selected(current),
        }
    }
}

fn describe(difficulty: Difficulty) -> String {
    let blurb = match difficulty {
        Difficulty::Easy => "plays anywhere",
        Difficulty::Medium => "takes wins, blocks threats",
        Difficulty::Hard => "never loses",
    };
    format!("{:<8} {}", difficulty.label(), blurb)
}

impl Screen for DifficultySelectScreen {
    fn render(&self, frame: &mut Frame, _session: &Session, _now: Instant) {
        let body = draw_chrome(
            frame,
            "Single Player",
            "↑↓: Navigate | Enter: Start | Esc: Back | q: Quit",
        );
        self.menu.render(frame, body, "Choose difficulty", describe);
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
                Some(difficulty) => {
                    info!(%difficulty, "Difficulty chosen");
                    ScreenTransition::ChooseDifficulty(difficulty)
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Esc => ScreenTransition::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
