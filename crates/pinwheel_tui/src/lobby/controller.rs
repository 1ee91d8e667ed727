//! Lobby controller: the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use derive_getters::Getters;
use pinwheel_tictactoe::{Session, Stage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::animation::Timings;
use crate::config::GameConfig;
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{
    DifficultySelectScreen, InGameScreen, ModeSelectScreen, ResultScreen,
};
use crate::pacing::ThinkingPlan;

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    ModeSelect(ModeSelectScreen),
    DifficultySelect(DifficultySelectScreen),
    InGame(InGameScreen),
    Result(ResultScreen),
}

impl ActiveScreen {
    fn for_stage(session: &Session, timings: Timings) -> Self {
        match session.stage() {
            Stage::ModeSelect => Self::ModeSelect(ModeSelectScreen::new(session.mode())),
            Stage::DifficultySelect => {
                Self::DifficultySelect(DifficultySelectScreen::new(session.difficulty()))
            }
            Stage::Playing(_) => Self::InGame(InGameScreen::new(timings)),
            Stage::Result { outcome, board } => Self::Result(ResultScreen::new(*outcome, *board)),
        }
    }

    fn shows(&self, stage: &Stage) -> bool {
        matches!(
            (self, stage),
            (Self::ModeSelect(_), Stage::ModeSelect)
                | (Self::DifficultySelect(_), Stage::DifficultySelect)
                | (Self::InGame(_), Stage::Playing(_))
                | (Self::Result(_), Stage::Result { .. })
        )
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::ModeSelect(s) => s,
            Self::DifficultySelect(s) => s,
            Self::InGame(s) => s,
            Self::Result(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::ModeSelect(s) => s,
            Self::DifficultySelect(s) => s,
            Self::InGame(s) => s,
            Self::Result(s) => s,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Input and time are passed in explicitly, so the whole flow can be
/// driven without a terminal. Call [`LobbyController::run`] to start the
/// event loop.
#[derive(Debug, Getters)]
pub struct LobbyController {
    /// Mode, difficulty and the current stage.
    session: Session,
    #[getter(skip)]
    screen: ActiveScreen,
    #[getter(skip)]
    rng: StdRng,
    /// Animation and pacing durations.
    timings: Timings,
    /// Event poll interval.
    tick_rate: Duration,
    #[getter(skip)]
    quit: bool,
}

impl LobbyController {
    /// Creates a controller at mode selection.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        info!(seed = ?config.seed(), animations = config.animations(), "Creating LobbyController");
        let session = Session::new(*config.default_difficulty());
        let timings = config.timings();
        Self {
            screen: ActiveScreen::for_stage(&session, timings),
            session,
            rng: config
                .seed()
                .map(StdRng::seed_from_u64)
                .unwrap_or_else(StdRng::from_entropy),
            timings,
            tick_rate: config.tick_rate(),
            quit: false,
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The in-game view, while a game is on the board.
    pub fn in_game(&self) -> Option<&InGameScreen> {
        match &self.screen {
            ActiveScreen::InGame(s) => Some(s),
            _ => None,
        }
    }

    /// Runs the lobby event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        while !self.quit {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|f| self.render(f, now))?;

            // Poll for input with short timeout to keep animations moving.
            if event::poll(self.tick_rate)? {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                self.handle_event(event::read()?, area, Instant::now());
            }
        }

        info!("Lobby quitting");
        Ok(())
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event, area: Rect, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, area, now),
            _ => {}
        }
    }

    /// Handles a key press on the active screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }
        let transition = self.screen.as_screen_mut().handle_key(key, &self.session);
        self.apply_transition(transition, now);
    }

    /// Handles a mouse event; `area` is the whole terminal.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, now: Instant) {
        let transition = self
            .screen
            .as_screen_mut()
            .handle_mouse(mouse, area, &self.session);
        self.apply_transition(transition, now);
    }

    /// Advances time-based state: the AI's move and the hand-off to the
    /// result screen.
    pub fn tick(&mut self, now: Instant) {
        let ActiveScreen::InGame(screen) = &mut self.screen else {
            return;
        };

        if self.session.awaiting_ai() {
            let board = self.session.game().map(|g| *g.board()).unwrap_or_default();
            let (difficulty, pacing, rng) =
                (self.session.difficulty(), self.timings.ai_pacing, &mut self.rng);
            let plan = screen.begin_thinking(|| {
                if pacing {
                    ThinkingPlan::new(difficulty, &board, now, rng)
                } else {
                    ThinkingPlan::immediate(now)
                }
            });
            if plan.is_ready(now) {
                screen.end_thinking();
                if let Some(pos) = self.session.play_ai_move(&mut self.rng) {
                    debug!(%pos, "AI moved");
                }
                screen.sync(&self.session, now);
            }
        }

        let due = screen.result_due(&self.session).is_some_and(|due| now >= due);
        if due && self.session.conclude().is_some() {
            self.sync_screen(now);
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        self.screen.as_screen().render(frame, &self.session, now);
    }

    /// Forwards a screen's request to the session and follows the stage.
    #[instrument(skip(self, now))]
    fn apply_transition(&mut self, transition: ScreenTransition, now: Instant) {
        let changed = match transition {
            ScreenTransition::Stay => return,
            ScreenTransition::ChooseMode(mode) => self.session.choose_mode(mode),
            ScreenTransition::ChooseDifficulty(difficulty) => {
                self.session.choose_difficulty(difficulty)
            }
            ScreenTransition::Place(pos) => self.session.tap(pos),
            ScreenTransition::Back => self.session.back(),
            ScreenTransition::PlayAgain => self.session.play_again(),
            ScreenTransition::StartOver => self.session.start_over(),
            ScreenTransition::Quit => {
                self.quit = true;
                return;
            }
        };
        debug!(changed, "Applied screen transition");
        if changed {
            self.sync_screen(now);
        }
    }

    /// Replaces the active screen when the stage moved on, and lets the
    /// game view pick up new marks.
    fn sync_screen(&mut self, now: Instant) {
        if !self.screen.shows(self.session.stage()) {
            info!(stage = stage_name(self.session.stage()), "Switching screen");
            self.screen = ActiveScreen::for_stage(&self.session, self.timings);
        }
        if let ActiveScreen::InGame(screen) = &mut self.screen {
            screen.sync(&self.session, now);
        }
    }
}

fn stage_name(stage: &Stage) -> &'static str {
    match stage {
        Stage::ModeSelect => "mode select",
        Stage::DifficultySelect => "difficulty select",
        Stage::Playing(_) => "playing",
        Stage::Result { .. } => "result",
    }
}
