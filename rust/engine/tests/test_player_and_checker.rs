use backgammon_engine::checker::{Checker, Location};
use backgammon_engine::errors::GameError;
use backgammon_engine::player::{Color, Player, DEFAULT_NAMES};

#[test]
fn player_keeps_name_and_color() {
    let p = Player::new("Alice", Color::White).unwrap();
    assert_eq!(p.name(), "Alice");
    assert_eq!(p.color(), Color::White);
    assert_eq!(p.score(), 0);
    assert_eq!(p.to_string(), "Alice (white)");
    assert_eq!(Player::new("", Color::Black), Err(GameError::EmptyPlayerName));
    assert_eq!(DEFAULT_NAMES, ["Player 1", "Player 2"]);
}

#[test]
fn colors_describe_their_route() {
    assert_eq!(Color::White.home_board(), 18..=23);
    assert_eq!(Color::Black.home_board(), 0..=5);
    assert_eq!(Color::White.entry_points(), 1..=6);
    assert_eq!(Color::Black.entry_points(), 19..=24);
    assert_eq!(Color::White.off_point(), 25);
    assert_eq!(Color::Black.off_point(), 0);
    assert_eq!(Color::White.direction(), 1);
    assert_eq!(Color::Black.direction(), -1);
    assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
}

#[test]
fn checker_home_and_pips() {
    let white = Checker::new(Color::White, Location::OnPoint(20));
    assert!(white.is_in_home_board());
    assert!(white.can_bear_off());
    assert_eq!(white.pip_value(), 4);
    assert!(white.is_moving_forward(22));
    assert!(!white.is_moving_forward(19));

    let black = Checker::new(Color::Black, Location::OnPoint(20));
    assert!(!black.is_in_home_board());
    assert_eq!(black.pip_value(), 21);
    assert!(black.is_moving_forward(3));
    assert!(!black.is_moving_forward(20));
}

#[test]
fn checkers_off_the_board_have_no_point() {
    let bar = Checker::new(Color::White, Location::Bar);
    assert_eq!(bar.point(), None);
    assert_eq!(bar.pip_value(), 0);
    assert!(!bar.can_bear_off());
    assert!(!bar.is_moving_forward(5));

    let off = Checker::new(Color::Black, Location::Off);
    assert!(off.is_off());
    assert!(!off.is_on_board());
}

#[test]
fn oversized_scores_are_rejected() {
    let mut p = Player::new("Alice", Color::White).unwrap();
    let too_big = i64::from(u32::MAX) + 1;
    assert_eq!(
        p.set_score(too_big),
        Err(GameError::ScoreOutOfRange { score: too_big })
    );
    assert_eq!(p.score(), 0);
    p.set_score(i64::from(u32::MAX)).unwrap();
    assert_eq!(p.score(), u32::MAX);
}
