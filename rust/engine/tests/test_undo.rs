use backgammon_engine::game::Game;
use backgammon_engine::player::Color;

fn started(seed: u64) -> Game {
    let mut game = Game::new_with_seed("Alice", "Bob", seed).expect("game");
    game.start_game();
    game
}

#[test]
fn nothing_to_undo_at_start() {
    let mut game = started(1);
    assert!(!game.can_undo_move());
    assert!(!game.undo_last_move());
}

#[test]
fn undo_restores_board_and_die() {
    let mut game = started(1);
    game.apply_roll(6, 1).unwrap();
    let before = game.board().clone();
    assert!(game.make_move(12, 18).unwrap());
    assert!(game.can_undo_move());
    assert!(game.undo_last_move());
    assert_eq!(game.board(), &before);
    assert_eq!(game.remaining_dice().len(), 2);
    assert!(game.remaining_dice().contains(6));
    assert_eq!(game.moves_count(), 0);
    assert!(game.move_history().is_empty());
}

#[test]
fn undo_crosses_the_turn_boundary() {
    let mut game = started(1);
    game.apply_roll(3, 1).unwrap();
    assert!(game.make_move(17, 20).unwrap());
    assert!(game.make_move(19, 20).unwrap());
    assert_eq!(game.current_player().color(), Color::Black);

    assert!(game.undo_last_move());
    assert_eq!(game.current_player().color(), Color::White);
    assert_eq!(game.turn_number(), 1);
    assert_eq!(game.last_dice_roll(), Some((3, 1)));
    assert_eq!(game.remaining_dice().values(), &[1]);
    assert!(game.make_move(19, 20).unwrap());
}

#[test]
fn undo_puts_a_hit_checker_back() {
    let mut game = started(1);
    game.set_current_player(Color::Black);
    game.apply_roll(6, 5).unwrap();
    assert!(game.make_move(24, 18).unwrap());
    assert!(game.make_move(13, 8).unwrap());
    // black left a blot on 18
    game.apply_roll(6, 4).unwrap();
    let before = game.board().clone();
    assert!(game.make_move(12, 18).unwrap());
    assert_eq!(game.board().bar_count(Color::Black), 1);
    assert!(game.undo_last_move());
    assert_eq!(game.board(), &before);
    assert_eq!(game.board().bar_count(Color::Black), 0);
}

#[test]
fn undo_reverts_a_win() {
    use backgammon_engine::board::Board;

    let mut b = Board::empty();
    b.place(Color::White, 23, 1).unwrap();
    b.place_off(Color::White, 14);
    b.place(Color::Black, 10, 15).unwrap();
    let mut game = Game::new_with_seed("Alice", "Bob", 1).unwrap();
    game.set_position(b).unwrap();
    game.start_game();
    game.apply_roll(1, 2).unwrap();
    assert!(game.make_move(24, 25).unwrap());
    assert!(game.is_finished());
    assert!(game.undo_last_move());
    assert!(!game.is_finished());
    assert!(game.is_started());
    assert!(game.winner().is_none());
}
