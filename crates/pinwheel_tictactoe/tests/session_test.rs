//! Session flow: mode select, difficulty select, play, result, and back.

use pinwheel_tictactoe::{
    AnyGame, Board, Difficulty, Outcome, Player, PlayerMode, Position, Session, Square, Stage,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn playing_board(session: &Session) -> Board {
    *session.game().expect("game on board").board()
}

#[test]
fn test_single_player_goes_through_difficulty_select() {
    let mut session = Session::new(Difficulty::Medium);
    assert_eq!(session.stage(), &Stage::ModeSelect);

    assert!(session.choose_mode(PlayerMode::SinglePlayer));
    assert_eq!(session.stage(), &Stage::DifficultySelect);

    assert!(session.choose_difficulty(Difficulty::Hard));
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.stage(), &Stage::Playing(AnyGame::new()));
}

#[test]
fn test_multiplayer_skips_difficulty_select() {
    let mut session = Session::default();
    assert!(session.choose_mode(PlayerMode::Multiplayer));
    assert!(matches!(session.stage(), Stage::Playing(_)));
    assert!(!session.choose_difficulty(Difficulty::Easy));
}

#[test]
fn test_out_of_stage_requests_are_ignored() {
    let mut session = Session::default();
    assert!(!session.choose_difficulty(Difficulty::Hard));
    assert!(!session.tap(Position::Center));
    assert!(!session.back());
    assert!(!session.play_again());
    assert!(!session.start_over());
    assert_eq!(session.conclude(), None);
    assert_eq!(session.stage(), &Stage::ModeSelect);
}

#[test]
fn test_multiplayer_alternates_and_ignores_occupied_taps() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::Multiplayer);

    assert!(session.tap(Position::Center));
    assert!(!session.tap(Position::Center));
    assert!(session.tap(Position::TopLeft));

    let board = playing_board(&session);
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    assert!(!session.awaiting_ai());
}

#[test]
fn test_taps_ignored_during_ai_turn() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::SinglePlayer);
    session.choose_difficulty(Difficulty::Easy);

    assert!(session.tap(Position::Center));
    assert!(session.awaiting_ai());
    assert!(!session.tap(Position::TopLeft));
    assert!(playing_board(&session).is_empty(Position::TopLeft));

    let mut rng = StdRng::seed_from_u64(1);
    let ai_pos = session.play_ai_move(&mut rng).expect("AI moves");
    assert_eq!(
        playing_board(&session).get(ai_pos),
        Square::Occupied(Player::O)
    );
    assert!(!session.awaiting_ai());
    assert_eq!(session.play_ai_move(&mut rng), None);
}

#[test]
fn test_win_concludes_to_result_and_blocks_further_moves() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::Multiplayer);
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        assert!(session.tap(pos));
    }

    let game = session.game().expect("still on the board until concluded");
    assert!(game.is_over());
    assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert!(!session.tap(Position::BottomRight));

    assert_eq!(session.conclude(), Some(Outcome::Winner(Player::X)));
    match session.stage() {
        Stage::Result { outcome, board } => {
            assert_eq!(*outcome, Outcome::Winner(Player::X));
            assert_eq!(board.count(Player::X), 3);
        }
        other => panic!("expected result stage, got {:?}", other),
    }
}

#[test]
fn test_conclude_waits_for_finished_game() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::Multiplayer);
    session.tap(Position::Center);
    assert_eq!(session.conclude(), None);
    assert!(matches!(session.stage(), Stage::Playing(_)));
}

#[test]
fn test_back_discards_game_in_progress() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::SinglePlayer);
    session.choose_difficulty(Difficulty::Hard);
    session.tap(Position::Center);
    assert!(session.awaiting_ai());

    assert!(session.back());
    assert_eq!(session.stage(), &Stage::ModeSelect);
    assert!(!session.awaiting_ai());

    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(session.play_ai_move(&mut rng), None);
}

#[test]
fn test_single_player_game_runs_to_result() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::SinglePlayer);
    session.choose_difficulty(Difficulty::Hard);
    let mut rng = StdRng::seed_from_u64(3);

    // Human always takes the lowest empty cell; Hard O never loses.
    while session.conclude().is_none() {
        if session.awaiting_ai() {
            session.play_ai_move(&mut rng).expect("AI moves");
        } else {
            let pos = playing_board(&session)
                .empty_positions()
                .next()
                .expect("open board");
            assert!(session.tap(pos));
        }
    }

    let Stage::Result { outcome, .. } = session.stage().clone() else {
        panic!("expected result stage");
    };
    assert_ne!(outcome, Outcome::Winner(Player::X));
}

#[test]
fn test_play_again_keeps_mode_and_difficulty() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::SinglePlayer);
    session.choose_difficulty(Difficulty::Easy);
    let mut rng = StdRng::seed_from_u64(4);
    while session.conclude().is_none() {
        if session.awaiting_ai() {
            session.play_ai_move(&mut rng);
        } else {
            let pos = playing_board(&session).empty_positions().next().unwrap();
            session.tap(pos);
        }
    }

    assert!(session.play_again());
    assert_eq!(session.mode(), PlayerMode::SinglePlayer);
    assert_eq!(session.difficulty(), Difficulty::Easy);
    assert_eq!(playing_board(&session), Board::new());
}

#[test]
fn test_start_over_returns_to_mode_select() {
    let mut session = Session::default();
    session.choose_mode(PlayerMode::Multiplayer);
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        session.tap(pos);
    }
    assert_eq!(session.conclude(), Some(Outcome::Winner(Player::X)));
    assert!(session.start_over());
    assert_eq!(session.stage(), &Stage::ModeSelect);
}
