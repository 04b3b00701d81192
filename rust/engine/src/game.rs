use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::cube::DoublingCube;
use crate::dice::{Dice, DicePool};
use crate::errors::GameError;
use crate::logger::{GameRecord, MoveKind, MoveRecord};
use crate::player::{Color, Player, CHECKERS_PER_PLAYER};
use crate::rules::{self, CandidateMove, MoveError, ValidatedMove};
use crate::snapshot::GameSnapshot;

/// How decisively a finished game was won.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinKind {
    /// The loser had borne off at least one checker
    Single,
    /// The loser had borne off nothing
    Gammon,
    /// Gammon with a loser checker still on the bar or in the winner's home board
    Backgammon,
}

impl WinKind {
    pub fn multiplier(self) -> u32 {
        match self {
            WinKind::Single => 1,
            WinKind::Gammon => 2,
            WinKind::Backgammon => 3,
        }
    }
}

/// Everything a single applied move can change, kept so the move can be undone.
#[derive(Debug, Clone)]
struct TurnState {
    board: Board,
    current: Color,
    started: bool,
    finished: bool,
    winner: Option<Color>,
    dice_rolled: bool,
    last_roll: Option<(u8, u8)>,
    pool: DicePool,
    turn_number: u32,
    moves_count: u32,
}

/// The match state machine: owns both players, the board, the dice and the
/// doubling cube, and is the only place board state changes.
///
/// A front end rolls, then submits moves until the unused dice run out, at
/// which point the turn passes automatically. Phase violations are returned as
/// [`GameError`]; an illegal move is a plain `Ok(false)`.
///
/// # Examples
///
/// ```
/// use backgammon_engine::game::Game;
/// use backgammon_engine::player::Color;
///
/// let mut game = Game::new_with_seed("Alice", "Bob", 7)?;
/// game.start_game();
/// game.apply_roll(3, 1)?;
///
/// assert!(game.make_move(17, 20)?);
/// assert!(!game.make_move(12, 13)?); // blocked by black
/// assert!(game.make_move(19, 20)?);
///
/// // both dice used: black to play
/// assert_eq!(game.current_player().color(), Color::Black);
/// assert_eq!(game.turn_number(), 2);
/// # Ok::<(), backgammon_engine::errors::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// White first, black second
    players: [Player; 2],
    board: Board,
    dice: Dice,
    /// Seed the dice were created with
    seed: u64,
    current: Color,
    started: bool,
    finished: bool,
    winner: Option<Color>,
    dice_rolled: bool,
    last_roll: Option<(u8, u8)>,
    /// Unused die values this turn
    pool: DicePool,
    turn_number: u32,
    moves_count: u32,
    history: Vec<MoveRecord>,
    undo_stack: Vec<TurnState>,
    cube: DoublingCube,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_players(
            [Player::default_for(Color::White), Player::default_for(Color::Black)],
            rand::random(),
        )
    }
}

impl Game {
    /// Creates a game with randomly seeded dice. The first name plays white.
    pub fn new(player1: &str, player2: &str) -> Result<Self, GameError> {
        Self::new_with_seed(player1, player2, rand::random())
    }

    pub fn new_with_seed(player1: &str, player2: &str, seed: u64) -> Result<Self, GameError> {
        if player1.trim().is_empty() || player2.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if player1 == player2 {
            return Err(GameError::DuplicatePlayerNames {
                name: player1.to_string(),
            });
        }
        let players = [
            Player::new(player1, Color::White)?,
            Player::new(player2, Color::Black)?,
        ];
        Ok(Self::with_players(players, seed))
    }

    pub fn from_config(cfg: &EngineConfig) -> Result<Self, GameError> {
        match cfg.seed {
            Some(seed) => Self::new_with_seed(&cfg.white_name, &cfg.black_name, seed),
            None => Self::new(&cfg.white_name, &cfg.black_name),
        }
    }

    fn with_players(players: [Player; 2], seed: u64) -> Self {
        Self {
            players,
            board: Board::standard(),
            dice: Dice::new_with_seed(seed),
            seed,
            current: Color::White,
            started: false,
            finished: false,
            winner: None,
            dice_rolled: false,
            last_roll: None,
            pool: DicePool::empty(),
            turn_number: 1,
            moves_count: 0,
            history: Vec::new(),
            undo_stack: Vec::new(),
            cube: DoublingCube::default(),
        }
    }

    // --- players ---

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }
    pub fn player1(&self) -> &Player {
        self.player(Color::White)
    }
    pub fn player2(&self) -> &Player {
        self.player(Color::Black)
    }
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }
    pub fn set_current_player(&mut self, color: Color) {
        self.current = color;
    }
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    pub fn match_score(&self, color: Color) -> u32 {
        self.player(color).score()
    }

    pub fn set_match_score(&mut self, color: Color, score: i64) -> Result<(), GameError> {
        self.players[color.index()].set_score(score)
    }

    // --- read-only views ---

    /// Shared view of the board; it can only change through this game.
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn dice(&self) -> &Dice {
        &self.dice
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
    pub fn moves_count(&self) -> u32 {
        self.moves_count
    }
    pub fn pip_count(&self, color: Color) -> u32 {
        self.board.pip_count(color)
    }
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.history
    }

    // --- lifecycle ---

    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|c| self.player(c))
    }
    pub fn check_win_condition(&self) -> bool {
        self.winner.is_some()
    }

    /// Marks the match active and clears turn bookkeeping. The board is
    /// re-populated only when it is completely empty.
    pub fn start_game(&mut self) {
        self.started = true;
        self.finished = false;
        self.winner = None;
        self.turn_number = 1;
        self.moves_count = 0;
        self.clear_dice();
        self.history.clear();
        self.undo_stack.clear();
        self.cube.clear_decline();
        if self.board.is_empty() {
            self.board.setup_initial_position();
        }
        self.current = Color::White;
        info!(
            white = self.player1().name(),
            black = self.player2().name(),
            seed = self.seed,
            "game started"
        );
    }

    /// Back to the not-started state with an empty board.
    pub fn reset_game(&mut self) {
        self.started = false;
        self.finished = false;
        self.winner = None;
        self.turn_number = 1;
        self.moves_count = 0;
        self.clear_dice();
        self.history.clear();
        self.undo_stack.clear();
        self.board.reset();
        self.cube.reset();
        self.current = Color::White;
        debug!("game reset");
    }

    pub fn finish_game(&mut self) {
        self.finished = true;
        self.started = false;
    }

    /// Kind of win, once a winner exists.
    pub fn win_kind(&self) -> Option<WinKind> {
        let winner = self.winner?;
        let loser = winner.opponent();
        if self.board.off_count(loser) > 0 {
            return Some(WinKind::Single);
        }
        let stuck_in_home = self
            .board
            .checker_positions(loser)
            .iter()
            .any(|i| winner.home_board().contains(i));
        if self.board.has_checkers_on_bar(loser) || stuck_in_home {
            Some(WinKind::Backgammon)
        } else {
            Some(WinKind::Gammon)
        }
    }

    /// Stake of the game at the current cube value.
    pub fn game_value(&self) -> u32 {
        self.cube.value()
    }

    // --- dice and turns ---

    pub fn roll_dice(&mut self) -> Result<(u8, u8), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        let roll = self.dice.roll();
        self.set_roll(roll);
        Ok(roll)
    }

    /// Uses dice rolled outside the engine, with the same effect as [`Game::roll_dice`].
    pub fn apply_roll(&mut self, d1: u8, d2: u8) -> Result<(u8, u8), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        self.dice.set_last_roll((d1, d2))?;
        self.set_roll((d1, d2));
        Ok((d1, d2))
    }

    fn set_roll(&mut self, roll: (u8, u8)) {
        self.last_roll = Some(roll);
        self.pool = Dice::moves(roll);
        self.dice_rolled = true;
        debug!(player = %self.current, d1 = roll.0, d2 = roll.1, "dice rolled");
    }

    fn clear_dice(&mut self) {
        self.dice_rolled = false;
        self.last_roll = None;
        self.pool.clear();
    }

    pub fn has_dice_been_rolled(&self) -> bool {
        self.dice_rolled
    }
    pub fn last_dice_roll(&self) -> Option<(u8, u8)> {
        self.last_roll
    }
    pub fn remaining_dice(&self) -> &DicePool {
        &self.pool
    }

    /// Passes the turn: counter +1, other player, dice cleared.
    pub fn end_turn(&mut self) {
        self.turn_number += 1;
        self.switch_player();
        self.clear_dice();
        debug!(turn = self.turn_number, player = %self.current, "turn started");
    }

    // --- moves ---

    fn in_move_phase(&self) -> bool {
        self.started && !self.finished && self.dice_rolled
    }

    fn ensure_move_phase(&self) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if !self.dice_rolled {
            return Err(GameError::DiceNotRolled);
        }
        Ok(())
    }

    /// Legality of a point move for the player to move, with the reason it fails.
    pub fn check_move(&self, from: u8, to: u8) -> Result<ValidatedMove, MoveError> {
        rules::validate_move(&self.board, self.current, &self.pool, from, to)
    }

    pub fn is_valid_move(&self, from: u8, to: u8) -> bool {
        self.in_move_phase() && self.check_move(from, to).is_ok()
    }

    /// Plays a checker from `from` to `to` (or to the off sentinel).
    ///
    /// `Ok(false)` leaves the game untouched when the move is illegal.
    pub fn make_move(&mut self, from: u8, to: u8) -> Result<bool, GameError> {
        self.ensure_move_phase()?;
        match self.check_move(from, to) {
            Ok(mv) => self.apply(mv).map(|_| true),
            Err(reason) => {
                debug!(player = %self.current, from, to, %reason, "move rejected");
                Ok(false)
            }
        }
    }

    /// Re-enters a checker from the bar onto `to`.
    pub fn make_move_from_bar(&mut self, to: u8) -> Result<bool, GameError> {
        self.ensure_move_phase()?;
        match rules::validate_entry(&self.board, self.current, &self.pool, to) {
            Ok(mv) => self.apply(mv).map(|_| true),
            Err(reason) => {
                debug!(player = %self.current, to, %reason, "entry rejected");
                Ok(false)
            }
        }
    }

    /// Plays a move returned by [`Game::available_moves`].
    pub fn apply_move(&mut self, mv: &CandidateMove) -> Result<bool, GameError> {
        if mv.from == self.current.bar_point() {
            self.make_move_from_bar(mv.to)
        } else {
            self.make_move(mv.from, mv.to)
        }
    }

    /// Commits a validated move. Mutations happen on a scratch board that
    /// replaces the live one only when every primitive succeeded.
    fn apply(&mut self, mv: ValidatedMove) -> Result<(), GameError> {
        let color = self.current;
        let mut board = self.board.clone();
        let mut pool = self.pool.clone();

        let kind = match mv {
            ValidatedMove::Ordinary { from, to, hit, .. } => {
                let checker = board.remove_checker_from_point(from)?;
                if hit {
                    board.hit_blot(to, color)?;
                }
                board.add_checker_to_point(to, checker)?;
                MoveKind::Ordinary
            }
            ValidatedMove::Enter { to, hit, .. } => {
                let checker = board.remove_checker_from_bar(color)?;
                if hit {
                    board.hit_blot(to, color)?;
                }
                board.add_checker_to_point(to, checker)?;
                MoveKind::Enter
            }
            ValidatedMove::BearOff { from, .. } => {
                let checker = board.remove_checker_from_point(from)?;
                board.add_checker_off(checker);
                MoveKind::BearOff
            }
        };
        let die = mv.die();
        if !pool.take(die) {
            return Err(GameError::InvalidDieValue { value: die });
        }

        let (from, to) = mv.points(color);
        let record = MoveRecord {
            turn: self.turn_number,
            color,
            kind,
            from,
            to,
            die,
            hit: mv.hits(),
        };
        self.undo_stack.push(self.capture());
        self.board = board;
        self.pool = pool;
        self.moves_count += 1;
        debug!(player = %color, from, to, die, hit = record.hit, "move applied");
        self.history.push(record);

        if self.board.off_count(color) >= CHECKERS_PER_PLAYER {
            self.winner = Some(color);
            self.finish_game();
            info!(winner = %color, turn = self.turn_number, "game won");
        } else if self.pool.is_empty() {
            self.end_turn();
        }
        Ok(())
    }

    pub fn must_enter_from_bar(&self, color: Color) -> bool {
        self.board.has_checkers_on_bar(color)
    }

    pub fn can_bear_off(&self, color: Color) -> bool {
        self.board.can_bear_off(color)
    }

    /// Legal single moves for the player to move; empty outside the move phase.
    pub fn available_moves(&self) -> Vec<CandidateMove> {
        if !self.in_move_phase() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current, &self.pool)
    }

    /// Whether `color` is to move and has at least one legal move.
    pub fn can_player_move(&self, color: Color) -> bool {
        color == self.current && !self.available_moves().is_empty()
    }

    /// Installs an arbitrary position (puzzles, tests, analysis). The board
    /// must hold exactly 15 correctly tagged checkers per color. Move
    /// history, undo information and any previous result are discarded.
    pub fn set_position(&mut self, board: Board) -> Result<(), GameError> {
        board.check_invariants()?;
        self.board = board;
        self.winner = None;
        self.finished = false;
        self.history.clear();
        self.undo_stack.clear();
        Ok(())
    }

    // --- undo ---

    fn capture(&self) -> TurnState {
        TurnState {
            board: self.board.clone(),
            current: self.current,
            started: self.started,
            finished: self.finished,
            winner: self.winner,
            dice_rolled: self.dice_rolled,
            last_roll: self.last_roll,
            pool: self.pool.clone(),
            turn_number: self.turn_number,
            moves_count: self.moves_count,
        }
    }

    pub fn can_undo_move(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Restores the position, dice and turn exactly as they were before the
    /// last applied move. Returns false when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(state) = self.undo_stack.pop() else {
            return false;
        };
        self.history.pop();
        self.board = state.board;
        self.current = state.current;
        self.started = state.started;
        self.finished = state.finished;
        self.winner = state.winner;
        self.dice_rolled = state.dice_rolled;
        self.last_roll = state.last_roll;
        self.pool = state.pool;
        self.turn_number = state.turn_number;
        self.moves_count = state.moves_count;
        debug!(player = %self.current, "move undone");
        true
    }

    // --- doubling cube ---

    pub fn offer_double(&mut self, color: Color) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        self.cube.offer(color)?;
        info!(player = %color, value = self.cube.value(), "double offered");
        Ok(())
    }

    pub fn accept_double(&mut self) -> Result<(), GameError> {
        let value = self.cube.accept()?;
        info!(value, "double accepted");
        Ok(())
    }

    /// Ends the game. No winner is recorded; see [`Game::double_declined_by`].
    pub fn decline_double(&mut self) -> Result<(), GameError> {
        let offered_by = self.cube.decline()?;
        self.finished = true;
        info!(offered_by = %offered_by, "double declined");
        Ok(())
    }

    pub fn is_double_offered(&self) -> bool {
        self.cube.is_offered()
    }
    pub fn can_offer_double(&self, color: Color) -> bool {
        !self.finished && self.cube.can_offer(color)
    }
    pub fn doubling_cube_value(&self) -> u32 {
        self.cube.value()
    }
    pub fn doubling_cube_owner(&self) -> Option<Color> {
        self.cube.owner()
    }
    pub fn double_declined_by(&self) -> Option<Color> {
        self.cube.declined_by()
    }

    // --- persistence ---

    pub fn save_game_state(&self) -> GameSnapshot {
        GameSnapshot {
            white: self.player1().clone(),
            black: self.player2().clone(),
            board: self.board.clone(),
            current_player: self.current,
            started: self.started,
            finished: self.finished,
            winner: self.winner,
            dice_rolled: self.dice_rolled,
            last_roll: self.last_roll,
            remaining_dice: self.pool.clone(),
            turn_number: self.turn_number,
            moves_count: self.moves_count,
            cube: self.cube.clone(),
        }
    }

    /// Replaces the whole game state with a validated snapshot. Move history
    /// and undo information do not survive a load.
    pub fn load_game_state(&mut self, snap: &GameSnapshot) -> Result<(), GameError> {
        snap.validate()?;
        self.players = [snap.white.clone(), snap.black.clone()];
        self.board = snap.board.clone();
        self.current = snap.current_player;
        self.started = snap.started;
        self.finished = snap.finished;
        self.winner = snap.winner;
        self.dice_rolled = snap.dice_rolled;
        self.last_roll = snap.last_roll;
        self.pool = snap.remaining_dice.clone();
        self.turn_number = snap.turn_number;
        self.moves_count = snap.moves_count;
        self.cube = snap.cube.clone();
        self.history.clear();
        self.undo_stack.clear();
        debug!(turn = self.turn_number, player = %self.current, "game state loaded");
        Ok(())
    }

    /// History record for the game log.
    pub fn to_record(&self, game_id: impl Into<String>) -> GameRecord {
        GameRecord {
            game_id: game_id.into(),
            seed: Some(self.seed),
            white: self.player1().name().to_string(),
            black: self.player2().name().to_string(),
            moves: self.history.clone(),
            winner: self.winner,
            cube_value: self.cube.value(),
            turns: self.turn_number,
            ts: None,
            meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_roll_rejects_bad_faces() {
        let mut game = Game::new_with_seed("A", "B", 1).unwrap();
        game.start_game();
        assert_eq!(
            game.apply_roll(0, 3),
            Err(GameError::InvalidDieValue { value: 0 })
        );
        assert!(!game.has_dice_been_rolled());
    }

    #[test]
    fn win_kind_requires_winner() {
        let game = Game::default();
        assert_eq!(game.win_kind(), None);
        assert_eq!(game.player1().name(), "Player 1");
    }
}
