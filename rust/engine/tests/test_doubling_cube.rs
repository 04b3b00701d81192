use backgammon_engine::errors::GameError;
use backgammon_engine::game::Game;
use backgammon_engine::player::Color;

fn started() -> Game {
    let mut game = Game::new_with_seed("Alice", "Bob", 2).expect("game");
    game.start_game();
    game
}

#[test]
fn cube_starts_centered_at_one() {
    let game = started();
    assert_eq!(game.doubling_cube_value(), 1);
    assert_eq!(game.game_value(), 1);
    assert_eq!(game.doubling_cube_owner(), None);
    assert!(!game.is_double_offered());
    assert!(game.can_offer_double(Color::White));
    assert!(game.can_offer_double(Color::Black));
}

#[test]
fn accepted_double_doubles_the_stake() {
    let mut game = started();
    game.offer_double(Color::White).unwrap();
    assert!(game.is_double_offered());
    assert_eq!(game.offer_double(Color::Black), Err(GameError::DoubleAlreadyOffered));
    game.accept_double().unwrap();
    assert!(!game.is_double_offered());
    assert_eq!(game.doubling_cube_value(), 2);
    assert_eq!(game.game_value(), 2);
    assert_eq!(game.doubling_cube_owner(), Some(Color::Black));
}

#[test]
fn only_the_owner_may_redouble() {
    let mut game = started();
    game.offer_double(Color::White).unwrap();
    game.accept_double().unwrap();
    assert!(!game.can_offer_double(Color::White));
    assert_eq!(
        game.offer_double(Color::White),
        Err(GameError::CubeNotOwned {
            color: Color::White
        })
    );
    game.offer_double(Color::Black).unwrap();
    game.accept_double().unwrap();
    assert_eq!(game.doubling_cube_value(), 4);
    assert_eq!(game.doubling_cube_owner(), Some(Color::White));
}

#[test]
fn answering_without_an_offer_is_an_error() {
    let mut game = started();
    assert_eq!(game.accept_double(), Err(GameError::NoDoubleOffered));
    assert_eq!(game.decline_double(), Err(GameError::NoDoubleOffered));
}

#[test]
fn declining_ends_the_game_without_a_winner() {
    let mut game = started();
    game.offer_double(Color::Black).unwrap();
    game.decline_double().unwrap();
    assert!(game.is_finished());
    assert!(game.winner().is_none());
    assert_eq!(game.double_declined_by(), Some(Color::White));
    assert_eq!(game.doubling_cube_value(), 1);
    assert_eq!(game.offer_double(Color::Black), Err(GameError::GameFinished));
    assert!(!game.can_offer_double(Color::Black));
    assert_eq!(game.roll_dice(), Err(GameError::GameFinished));
}

#[test]
fn new_game_clears_the_cube_only_on_reset() {
    let mut game = started();
    game.offer_double(Color::White).unwrap();
    game.accept_double().unwrap();
    game.start_game();
    assert_eq!(game.doubling_cube_value(), 2);
    game.reset_game();
    assert_eq!(game.doubling_cube_value(), 1);
}

#[test]
fn restarting_after_a_decline_allows_doubling_again() {
    let mut game = started();
    game.offer_double(Color::White).unwrap();
    game.accept_double().unwrap();
    game.offer_double(Color::Black).unwrap();
    game.decline_double().unwrap();

    game.start_game();
    assert!(!game.is_finished());
    assert_eq!(game.double_declined_by(), None);
    assert_eq!(game.doubling_cube_value(), 2);
    assert_eq!(game.doubling_cube_owner(), Some(Color::Black));
    assert!(game.can_offer_double(Color::Black));
    assert_eq!(game.offer_double(Color::Black), Ok(()));
    assert!(!game.can_offer_double(Color::White));
}
