//! Drives the lobby without a terminal and renders with `TestBackend`.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pinwheel_tictactoe::{Difficulty, Outcome, Player, PlayerMode, Position, Square, Stage};
use pinwheel_tui::lobby::screens::InGameScreen;
use pinwheel_tui::{GameConfig, LobbyController};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::time::{Duration, Instant};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 30;

fn controller(animations: bool) -> LobbyController {
    let config = GameConfig::default()
        .with_seed(17)
        .with_animations(animations);
    LobbyController::new(&config)
}

fn press(c: &mut LobbyController, code: KeyCode, now: Instant) {
    c.handle_key(KeyEvent::from(code), now);
}

fn screen_text(c: &LobbyController, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| c.render(f, now)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn square(c: &LobbyController, pos: Position) -> Square {
    c.session().game().expect("game on board").board().get(pos)
}

#[test]
fn test_single_player_flow_with_menus() {
    let mut c = controller(false);
    let now = Instant::now();
    assert!(screen_text(&c, now).contains("Single Player"));

    press(&mut c, KeyCode::Enter, now);
    assert_eq!(c.session().stage(), &Stage::DifficultySelect);
    assert!(screen_text(&c, now).contains("never loses"));

    // Medium is preselected; one down is Hard.
    press(&mut c, KeyCode::Down, now);
    press(&mut c, KeyCode::Enter, now);
    assert_eq!(c.session().difficulty(), Difficulty::Hard);
    assert!(matches!(c.session().stage(), Stage::Playing(_)));
    assert!(screen_text(&c, now).contains("X's turn"));
}

#[test]
fn test_ai_answers_on_tick() {
    let mut c = controller(false);
    let now = Instant::now();
    press(&mut c, KeyCode::Enter, now);
    press(&mut c, KeyCode::Enter, now);

    press(&mut c, KeyCode::Char('5'), now);
    assert_eq!(square(&c, Position::Center), Square::Occupied(Player::X));
    assert!(c.session().awaiting_ai());
    assert!(screen_text(&c, now).contains("AI is thinking"));

    // Taps during the AI turn are ignored.
    press(&mut c, KeyCode::Char('1'), now);
    assert_eq!(square(&c, Position::TopLeft), Square::Empty);

    c.tick(now);
    assert!(!c.session().awaiting_ai());
    let board = *c.session().game().unwrap().board();
    assert_eq!(board.count(Player::O), 1);
}

#[test]
fn test_ai_waits_for_thinking_delay() {
    let mut c = controller(true);
    let t0 = Instant::now();
    press(&mut c, KeyCode::Enter, t0);
    press(&mut c, KeyCode::Up, t0);
    press(&mut c, KeyCode::Enter, t0);
    assert_eq!(c.session().difficulty(), Difficulty::Easy);

    press(&mut c, KeyCode::Enter, t0);
    c.tick(t0);
    let plan = c.in_game().and_then(|s| s.thinking()).expect("AI is thinking");
    assert!(plan.focus(t0).is_some());

    c.tick(t0 + Duration::from_millis(299));
    assert!(c.session().awaiting_ai());

    c.tick(t0 + Duration::from_millis(700));
    assert!(!c.session().awaiting_ai());
    assert!(c.in_game().unwrap().thinking().is_none());
}

#[test]
fn test_back_cancels_pending_ai_move() {
    let mut c = controller(true);
    let t0 = Instant::now();
    press(&mut c, KeyCode::Enter, t0);
    press(&mut c, KeyCode::Enter, t0);
    press(&mut c, KeyCode::Enter, t0);
    c.tick(t0);
    assert!(c.in_game().unwrap().thinking().is_some());

    press(&mut c, KeyCode::Esc, t0);
    assert_eq!(c.session().stage(), &Stage::ModeSelect);
    c.tick(t0 + Duration::from_secs(5));
    assert_eq!(c.session().stage(), &Stage::ModeSelect);
    assert!(c.in_game().is_none());
}

#[test]
fn test_multiplayer_win_reaches_result_after_animation() {
    let mut c = controller(true);
    let t0 = Instant::now();
    press(&mut c, KeyCode::Down, t0);
    press(&mut c, KeyCode::Enter, t0);
    assert_eq!(c.session().mode(), PlayerMode::Multiplayer);

    for key in ['1', '5', '2', '7', '3'] {
        press(&mut c, KeyCode::Char(key), t0);
    }
    assert!(screen_text(&c, t0).contains("Game Over"));

    c.tick(t0 + Duration::from_millis(2159));
    assert!(matches!(c.session().stage(), Stage::Playing(_)));

    c.tick(t0 + Duration::from_millis(2160));
    assert_eq!(
        c.session().stage(),
        &Stage::Result {
            outcome: Outcome::Winner(Player::X),
            board: "XXX|_O_|O__".parse().unwrap(),
        }
    );
    let text = screen_text(&c, t0);
    assert!(text.contains("X Wins!"));
    assert!(text.contains("Play Again"));
    assert!(text.contains("Start Over"));
}

#[test]
fn test_draw_reaches_result() {
    let mut c = controller(false);
    let now = Instant::now();
    press(&mut c, KeyCode::Down, now);
    press(&mut c, KeyCode::Enter, now);

    for key in ['1', '5', '3', '2', '8', '4', '6', '9', '7'] {
        press(&mut c, KeyCode::Char(key), now);
    }
    c.tick(now);
    assert!(matches!(
        c.session().stage(),
        Stage::Result {
            outcome: Outcome::Draw,
            ..
        }
    ));
    assert!(screen_text(&c, now).contains("It's a Draw!"));
}

#[test]
fn test_play_again_and_start_over() {
    let mut c = controller(false);
    let now = Instant::now();
    press(&mut c, KeyCode::Down, now);
    press(&mut c, KeyCode::Enter, now);
    for key in ['1', '4', '2', '5', '3'] {
        press(&mut c, KeyCode::Char(key), now);
    }
    c.tick(now);

    press(&mut c, KeyCode::Enter, now);
    assert!(matches!(c.session().stage(), Stage::Playing(_)));
    assert_eq!(c.session().mode(), PlayerMode::Multiplayer);
    assert_eq!(square(&c, Position::TopLeft), Square::Empty);

    for key in ['1', '4', '2', '5', '3'] {
        press(&mut c, KeyCode::Char(key), now);
    }
    c.tick(now);
    press(&mut c, KeyCode::Down, now);
    press(&mut c, KeyCode::Enter, now);
    assert_eq!(c.session().stage(), &Stage::ModeSelect);
}

#[test]
fn test_mouse_click_places_mark() {
    let mut c = controller(false);
    let now = Instant::now();
    press(&mut c, KeyCode::Down, now);
    press(&mut c, KeyCode::Enter, now);

    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let target = InGameScreen::board_geometry(area).cell_rect(Position::MiddleRight);

    c.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 4,
            row: target.y + 1,
            modifiers: KeyModifiers::NONE,
        }),
        area,
        now,
    );
    assert_eq!(square(&c, Position::MiddleRight), Square::Occupied(Player::X));
}

#[test]
fn test_key_release_is_ignored() {
    let mut c = controller(false);
    let now = Instant::now();
    let mut release = KeyEvent::from(KeyCode::Enter);
    release.kind = KeyEventKind::Release;
    c.handle_key(release, now);
    assert_eq!(c.session().stage(), &Stage::ModeSelect);
}

#[test]
fn test_quit() {
    let mut c = controller(false);
    let now = Instant::now();
    assert!(!c.should_quit());
    press(&mut c, KeyCode::Char('q'), now);
    assert!(c.should_quit());
}
