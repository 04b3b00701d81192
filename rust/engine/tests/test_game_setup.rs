use backgammon_engine::board::Board;
use backgammon_engine::errors::GameError;
use backgammon_engine::game::Game;
use backgammon_engine::player::Color;

#[test]
fn new_game_has_standard_layout() {
    let game = Game::new_with_seed("Alice", "Bob", 1).expect("game");
    let board = game.board();
    // white: 2 on 1, 5 on 12, 3 on 17, 5 on 19
    for (point, count) in [(1, 2), (12, 5), (17, 3), (19, 5)] {
        assert_eq!(board.point_owner(point - 1), Some(Color::White));
        assert_eq!(board.checker_count(point - 1), count);
    }
    // black mirrors white
    for (point, count) in [(24, 2), (13, 5), (8, 3), (6, 5)] {
        assert_eq!(board.point_owner(point - 1), Some(Color::Black));
        assert_eq!(board.checker_count(point - 1), count);
    }
    assert_eq!(board.checker_total(Color::White), 15);
    assert_eq!(board.checker_total(Color::Black), 15);
}

#[test]
fn opening_pip_counts_are_equal() {
    let game = Game::new_with_seed("Alice", "Bob", 1).unwrap();
    assert_eq!(game.pip_count(Color::White), 167);
    assert_eq!(game.pip_count(Color::Black), 167);
}

#[test]
fn first_name_plays_white() {
    let game = Game::new("Alice", "Bob").unwrap();
    assert_eq!(game.player1().name(), "Alice");
    assert_eq!(game.player1().color(), Color::White);
    assert_eq!(game.player2().name(), "Bob");
    assert_eq!(game.player2().color(), Color::Black);
    assert_eq!(game.current_player().color(), Color::White);
    assert!(!game.is_started());
    assert!(!game.is_finished());
    assert!(game.winner().is_none());
    assert_eq!(game.turn_number(), 1);
}

#[test]
fn rejects_bad_names() {
    assert_eq!(Game::new("", "Bob").unwrap_err(), GameError::EmptyPlayerName);
    assert_eq!(Game::new("Alice", "  ").unwrap_err(), GameError::EmptyPlayerName);
    assert_eq!(
        Game::new("Sam", "Sam").unwrap_err(),
        GameError::DuplicatePlayerNames {
            name: "Sam".to_string()
        }
    );
}

#[test]
fn default_game_uses_seat_names() {
    let game = Game::default();
    assert_eq!(game.player1().name(), "Player 1");
    assert_eq!(game.player2().name(), "Player 2");
}

#[test]
fn start_keeps_a_custom_position() {
    let mut game = Game::new_with_seed("A", "B", 3).unwrap();
    let mut board = Board::empty();
    board.place(Color::White, 20, 15).unwrap();
    board.place(Color::Black, 3, 15).unwrap();
    game.set_position(board.clone()).unwrap();
    game.start_game();
    assert_eq!(game.board(), &board);
}

#[test]
fn start_repopulates_an_empty_board() {
    let mut game = Game::new_with_seed("A", "B", 3).unwrap();
    game.reset_game();
    assert!(game.board().is_empty());
    game.start_game();
    assert_eq!(game.board(), &Board::standard());
    assert!(game.is_started());
}

#[test]
fn set_position_rejects_missing_checkers() {
    let mut game = Game::new_with_seed("A", "B", 3).unwrap();
    let mut board = Board::empty();
    board.place(Color::White, 20, 14).unwrap();
    board.place(Color::Black, 3, 15).unwrap();
    assert!(matches!(
        game.set_position(board),
        Err(GameError::InvalidSnapshot(_))
    ));
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn same_seed_rolls_the_same_dice() {
    let mut a = Game::new_with_seed("A", "B", 42).unwrap();
    let mut b = Game::new_with_seed("A", "B", 42).unwrap();
    a.start_game();
    b.start_game();
    for _ in 0..10 {
        assert_eq!(a.roll_dice().unwrap(), b.roll_dice().unwrap());
        a.end_turn();
        b.end_turn();
    }
    assert_eq!(a.seed(), 42);
}

#[test]
fn set_position_discards_history() {
    let mut game = Game::new_with_seed("A", "B", 3).unwrap();
    game.start_game();
    game.apply_roll(3, 1).unwrap();
    assert!(game.make_move(17, 20).unwrap());
    assert_eq!(game.move_history().len(), 1);

    game.set_position(Board::standard()).unwrap();
    assert!(game.move_history().is_empty());
    assert!(!game.can_undo_move());
    assert!(game.winner().is_none());
    assert!(!game.is_finished());
}
