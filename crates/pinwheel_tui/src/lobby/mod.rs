//! Lobby: the multi-screen terminal UI.

mod controller;
mod screen;
pub mod screens;

pub use controller::LobbyController;
pub use screen::{Screen, ScreenTransition};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Takes over the terminal, runs the lobby until the user quits, and
/// restores the terminal on every exit path.
pub async fn run_lobby(config: GameConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            return Err(e.into());
        }
    };

    let mut controller = LobbyController::new(&config);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Lobby loop error");
    } else {
        info!("Lobby closed");
    }
    res
}
