//! In-game screen: the board, its animations, and the AI's thinking sweep.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use pinwheel_tictactoe::{Player, PlayerMode, Position, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tracing::{debug, instrument};

use crate::animation::{Pulse, Timings, Tween};
use crate::input::{digit_position, move_cursor};
use crate::lobby::screen::{Screen, ScreenTransition};
use crate::pacing::ThinkingPlan;
use crate::ui::{BOARD_HEIGHT, BoardGeometry, BoardView, draw_board};

/// Label above the board.
pub fn turn_label(session: &Session) -> &'static str {
    let Some(game) = session.game() else {
        return "Game Over";
    };
    match game.to_move() {
        None => "Game Over",
        Some(_) if session.awaiting_ai() => "AI is thinking",
        Some(Player::X) => "X's turn",
        Some(Player::O) => "O's turn",
    }
}

/// View state of a game on the board.
#[derive(Debug)]
pub struct InGameScreen {
    cursor: Position,
    placed_at: [Option<Instant>; 9],
    finished_at: Option<Instant>,
    thinking: Option<ThinkingPlan>,
    timings: Timings,
}

impl InGameScreen {
    /// Creates the view for a fresh board.
    #[instrument]
    pub fn new(timings: Timings) -> Self {
        debug!("Initializing InGameScreen");
        Self {
            cursor: Position::Center,
            placed_at: [None; 9],
            finished_at: None,
            thinking: None,
            timings,
        }
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The AI's pending move schedule, if it is thinking.
    pub fn thinking(&self) -> Option<&ThinkingPlan> {
        self.thinking.as_ref()
    }

    /// Starts the AI's thinking schedule unless one is already running.
    pub fn begin_thinking(&mut self, plan: impl FnOnce() -> ThinkingPlan) -> &ThinkingPlan {
        self.thinking.get_or_insert_with(plan)
    }

    /// Drops the thinking schedule once the AI has moved.
    pub fn end_thinking(&mut self) {
        self.thinking = None;
    }

    /// Starts animations for marks that appeared since the last call.
    pub fn sync(&mut self, session: &Session, now: Instant) {
        let Some(game) = session.game() else {
            return;
        };
        for pos in Position::ALL {
            let slot = &mut self.placed_at[pos.to_index()];
            if slot.is_none() && !game.board().is_empty(pos) {
                *slot = Some(now);
            }
        }
        if game.is_over() && self.finished_at.is_none() {
            debug!("Game finished, starting end-of-game animation");
            self.finished_at = Some(now);
        }
    }

    /// When the result screen should replace the board.
    pub fn result_due(&self, session: &Session) -> Option<Instant> {
        let outcome = session.game()?.outcome()?;
        Some(self.finished_at? + self.timings.result_delay(&outcome))
    }

    /// Where the grid sits when the whole terminal is `area`.
    pub fn board_geometry(area: Rect) -> BoardGeometry {
        BoardGeometry::centered_in(Self::layout(area)[2])
    }

    fn layout(area: Rect) -> [Rect; 4] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(3),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }

    fn focus_level(&self, now: Instant) -> f32 {
        self.thinking
            .as_ref()
            .map_or(1.0, |plan| Pulse::focus(plan.started_at()).level(now))
    }

    fn mark_progress(&self, now: Instant) -> [f32; 9] {
        self.placed_at.map(|placed| match placed {
            Some(start) => Tween::new(start, self.timings.mark_fade).eased(now),
            None => 0.0,
        })
    }

    /// Cells the winning-line sweep has reached.
    fn win_cells(&self, session: &Session, now: Instant) -> [bool; 9] {
        let mut cells = [false; 9];
        let (Some(line), Some(finished)) = (
            session.game().and_then(|g| g.winning_line()),
            self.finished_at,
        ) else {
            return cells;
        };
        let started = finished + self.timings.mark_fade;
        if now < started {
            return cells;
        }
        let p = Tween::new(started, self.timings.win_sweep).eased(now);
        // The sweep reaches the k-th cell of the line at k/2 of the way.
        for (k, i) in line.indices().into_iter().enumerate() {
            if p >= k as f32 / 2.0 {
                cells[i] = true;
            }
        }
        cells
    }

    fn place(&mut self, pos: Position) -> ScreenTransition {
        self.cursor = pos;
        ScreenTransition::Place(pos)
    }
}

impl Screen for InGameScreen {
    fn render(&self, frame: &mut Frame, session: &Session, now: Instant) {
        let [title, label, board_area, help] = Self::layout(frame.area());

        let title_text = match session.mode() {
            PlayerMode::SinglePlayer => {
                format!("You (X) vs AI (O) - {}", session.difficulty().label())
            }
            PlayerMode::Multiplayer => "X vs O".to_string(),
        };
        frame.render_widget(
            Paragraph::new(title_text)
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            title,
        );

        frame.render_widget(
            Paragraph::new(turn_label(session))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            label,
        );

        if let Some(game) = session.game() {
            let view = BoardView {
                board: game.board(),
                cursor: (!game.is_over() && !session.awaiting_ai()).then_some(self.cursor),
                focus: self.thinking.as_ref().and_then(|plan| plan.focus(now)),
                focus_level: self.focus_level(now),
                mark_progress: self.mark_progress(now),
                win_cells: self.win_cells(session, now),
            };
            draw_board(frame, &Self::board_geometry(board_area), &view);
        }

        frame.render_widget(
            Paragraph::new("Arrows: Move | Enter/1-9/Click: Place | Esc: Back | q: Quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            help,
        );
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> ScreenTransition {
        if let Some(pos) = digit_position(key.code) {
            return self.place(pos);
        }
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => ScreenTransition::Place(self.cursor),
            KeyCode::Esc => ScreenTransition::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        _session: &Session,
    ) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        match Self::board_geometry(area).hit_test(mouse.column, mouse.row) {
            Some(pos) => {
                debug!(%pos, "Board clicked");
                self.place(pos)
            }
            None => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinwheel_tictactoe::Difficulty;
    use std::time::Duration;

    fn multiplayer() -> Session {
        let mut session = Session::new(Difficulty::Medium);
        session.choose_mode(PlayerMode::Multiplayer);
        session
    }

    #[test]
    fn test_turn_labels() {
        let mut session = multiplayer();
        assert_eq!(turn_label(&session), "X's turn");
        session.tap(Position::Center);
        assert_eq!(turn_label(&session), "O's turn");

        let mut single = Session::new(Difficulty::Easy);
        single.choose_mode(PlayerMode::SinglePlayer);
        single.choose_difficulty(Difficulty::Easy);
        single.tap(Position::Center);
        assert_eq!(turn_label(&single), "AI is thinking");
    }

    #[test]
    fn test_marks_fade_in_from_placement() {
        let mut session = multiplayer();
        let mut screen = InGameScreen::new(Timings::standard());
        let t0 = Instant::now();

        session.tap(Position::TopLeft);
        screen.sync(&session, t0);
        assert_eq!(screen.mark_progress(t0)[0], 0.0);
        assert!(screen.mark_progress(t0 + Duration::from_millis(360))[0] > 0.99);
        assert_eq!(screen.mark_progress(t0)[1], 0.0);
    }

    #[test]
    fn test_focus_pulses_while_thinking() {
        let mut screen = InGameScreen::new(Timings::standard());
        let t0 = Instant::now();
        assert_eq!(screen.focus_level(t0), 1.0);

        screen.begin_thinking(|| ThinkingPlan::immediate(t0));
        assert_eq!(screen.focus_level(t0), 0.6);
        let peak = screen.focus_level(t0 + Duration::from_millis(900));
        assert!((peak - 1.0).abs() < 1e-3);

        screen.end_thinking();
        assert_eq!(screen.focus_level(t0), 1.0);
    }

    #[test]
    fn test_win_line_sweeps_after_fade() {
        let mut session = multiplayer();
        let mut screen = InGameScreen::new(Timings::standard());
        let t0 = Instant::now();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            session.tap(pos);
        }
        screen.sync(&session, t0);
        assert_eq!(turn_label(&session), "Game Over");

        assert_eq!(screen.win_cells(&session, t0), [false; 9]);
        let started = screen.win_cells(&session, t0 + Duration::from_millis(360));
        assert!(started[0] && !started[2]);
        let done = screen.win_cells(&session, t0 + Duration::from_millis(960));
        assert_eq!(&done[..3], &[true, true, true]);

        assert_eq!(
            screen.result_due(&session),
            Some(t0 + Duration::from_millis(2160))
        );
    }

    #[test]
    fn test_keys() {
        let session = multiplayer();
        let mut screen = InGameScreen::new(Timings::instant());
        let key = |code| KeyEvent::from(code);

        assert_eq!(screen.handle_key(key(KeyCode::Up), &session), ScreenTransition::Stay);
        assert_eq!(screen.cursor(), Position::TopCenter);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &session),
            ScreenTransition::Place(Position::TopCenter)
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('7')), &session),
            ScreenTransition::Place(Position::BottomLeft)
        );
        assert_eq!(screen.cursor(), Position::BottomLeft);
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &session), ScreenTransition::Back);
    }

    #[test]
    fn test_mouse_click_places() {
        let session = multiplayer();
        let mut screen = InGameScreen::new(Timings::instant());
        let area = Rect::new(0, 0, 49, 24);
        let geometry = InGameScreen::board_geometry(area);
        let target = geometry.cell_rect(Position::BottomRight);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 1,
            row: target.y + 1,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        assert_eq!(
            screen.handle_mouse(click, area, &session),
            ScreenTransition::Place(Position::BottomRight)
        );

        let outside = MouseEvent { column: 0, row: 0, ..click };
        assert_eq!(screen.handle_mouse(outside, area, &session), ScreenTransition::Stay);
    }
}
