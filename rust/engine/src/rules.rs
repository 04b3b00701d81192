use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, NUM_POINTS};
use crate::dice::DicePool;
use crate::player::Color;

/// Why a requested move is not legal right now.
///
/// These are ordinary outcomes a front end meets while trying candidate
/// moves, not programming errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Point {point} holds no checker of the player to move")]
    NotOwnPoint { point: u8 },
    #[error("Checkers on the bar must re-enter first")]
    MustEnterFromBar,
    #[error("No checkers on the bar")]
    NoCheckersOnBar,
    #[error("No unused die shows {distance}")]
    DieNotAvailable { distance: u8 },
    #[error("Checkers may only move forward")]
    WrongDirection,
    #[error("Point {point} is not on the board")]
    OffBoard { point: u8 },
    #[error("Point {point} is held by two or more opposing checkers")]
    Blocked { point: u8 },
    #[error("Not all checkers are in the home board")]
    CannotBearOff,
    #[error("Only the rearmost checker may bear off with a larger die (point {point})")]
    NotRearmostChecker { point: u8 },
    #[error("Point {point} is not an entry point for this player")]
    InvalidEntryPoint { point: u8 },
}

/// A move that passed every legality check, with zero-based indices and the
/// die value it will consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedMove {
    /// Point to point
    Ordinary { from: usize, to: usize, die: u8, hit: bool },
    /// Bar to point
    Enter { to: usize, die: u8, hit: bool },
    /// Point to the bear-off tray
    BearOff { from: usize, die: u8 },
}

impl ValidatedMove {
    pub fn die(&self) -> u8 {
        match *self {
            ValidatedMove::Ordinary { die, .. }
            | ValidatedMove::Enter { die, .. }
            | ValidatedMove::BearOff { die, .. } => die,
        }
    }

    pub fn hits(&self) -> bool {
        match *self {
            ValidatedMove::Ordinary { hit, .. } | ValidatedMove::Enter { hit, .. } => hit,
            ValidatedMove::BearOff { .. } => false,
        }
    }

    /// External (from, to) point numbers, using the bar and off sentinels.
    pub fn points(&self, color: Color) -> (u8, u8) {
        match *self {
            ValidatedMove::Ordinary { from, to, .. } => (from as u8 + 1, to as u8 + 1),
            ValidatedMove::Enter { to, .. } => (color.bar_point(), to as u8 + 1),
            ValidatedMove::BearOff { from, .. } => (from as u8 + 1, color.off_point()),
        }
    }
}

/// A legal move offered to front ends: external point numbers plus a die
/// that permits it. Bar entries use the mover's bar sentinel as `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMove {
    pub from: u8,
    pub to: u8,
    pub die: u8,
}

fn is_board_point(point: u8) -> bool {
    (1..=NUM_POINTS as u8).contains(&point)
}

/// Validates an ordinary or bear-off move for `color` against the unused dice.
///
/// `from` and `to` are external point numbers (1..=24); a bear-off names the
/// mover's off sentinel (25 for white, 0 for black) as `to`. Checks run in
/// this order: the mover owns `from` and has nothing on the bar, then the
/// bear-off branch, then the ordinary branch (die, destination on the board,
/// direction, blocking).
///
/// # Examples
///
/// ```
/// use backgammon_engine::board::Board;
/// use backgammon_engine::dice::DicePool;
/// use backgammon_engine::player::Color;
/// use backgammon_engine::rules::{validate_move, MoveError, ValidatedMove};
///
/// let board = Board::standard();
/// let pool = DicePool::from_roll((3, 1));
///
/// let mv = validate_move(&board, Color::White, &pool, 17, 20).unwrap();
/// assert_eq!(mv, ValidatedMove::Ordinary { from: 16, to: 19, die: 3, hit: false });
///
/// // point 13 holds five black checkers
/// assert_eq!(
///     validate_move(&board, Color::White, &pool, 12, 13),
///     Err(MoveError::Blocked { point: 13 })
/// );
/// ```
pub fn validate_move(
    board: &Board,
    color: Color,
    pool: &DicePool,
    from: u8,
    to: u8,
) -> Result<ValidatedMove, MoveError> {
    if !is_board_point(from) {
        return Err(MoveError::NotOwnPoint { point: from });
    }
    let from_idx = usize::from(from - 1);
    if board.point_owner(from_idx) != Some(color) {
        return Err(MoveError::NotOwnPoint { point: from });
    }
    if board.has_checkers_on_bar(color) {
        return Err(MoveError::MustEnterFromBar);
    }

    if to == color.off_point() && Board::is_in_home_board(from_idx, color) {
        let die = bear_off_die(board, color, pool, from_idx)?;
        return Ok(ValidatedMove::BearOff {
            from: from_idx,
            die,
        });
    }

    let distance = to.abs_diff(from);
    if !pool.contains(distance) {
        return Err(MoveError::DieNotAvailable { distance });
    }
    if !is_board_point(to) {
        return Err(MoveError::OffBoard { point: to });
    }
    if (i16::from(to) - i16::from(from)) * i16::from(color.direction()) <= 0 {
        return Err(MoveError::WrongDirection);
    }
    let to_idx = usize::from(to - 1);
    if board.is_point_blocked(to_idx, color) {
        return Err(MoveError::Blocked { point: to });
    }
    Ok(ValidatedMove::Ordinary {
        from: from_idx,
        to: to_idx,
        die: distance,
        hit: board.can_hit_blot(to_idx, color),
    })
}

/// Picks the die that bears off the checker on `from_idx`: the exact distance
/// when available, otherwise the smallest larger die, which only the
/// rearmost checker may use.
pub fn bear_off_die(
    board: &Board,
    color: Color,
    pool: &DicePool,
    from_idx: usize,
) -> Result<u8, MoveError> {
    if !board.can_bear_off(color) {
        return Err(MoveError::CannotBearOff);
    }
    let required = color.pip_distance(from_idx) as u8;
    if pool.contains(required) {
        return Ok(required);
    }
    match pool.smallest_above(required) {
        Some(die) if board.furthest_checker(color) == Some(from_idx) => Ok(die),
        Some(_) => Err(MoveError::NotRearmostChecker {
            point: from_idx as u8 + 1,
        }),
        None => Err(MoveError::DieNotAvailable { distance: required }),
    }
}

/// Whether a single die value bears off the checker on `from_idx`.
pub fn bears_off_with(board: &Board, color: Color, from_idx: usize, die: u8) -> bool {
    if !board.can_bear_off(color) || board.point_owner(from_idx) != Some(color) {
        return false;
    }
    let required = color.pip_distance(from_idx) as u8;
    die == required || (die > required && board.furthest_checker(color) == Some(from_idx))
}

/// Point a checker of `color` lands on when entering with `die`.
pub fn entry_point(color: Color, die: u8) -> u8 {
    match color {
        Color::White => die,
        Color::Black => 25 - die,
    }
}

/// Validates re-entry from the bar onto external point `to`.
pub fn validate_entry(
    board: &Board,
    color: Color,
    pool: &DicePool,
    to: u8,
) -> Result<ValidatedMove, MoveError> {
    if !board.has_checkers_on_bar(color) {
        return Err(MoveError::NoCheckersOnBar);
    }
    if !color.entry_points().contains(&to) {
        return Err(MoveError::InvalidEntryPoint { point: to });
    }
    let distance = match color {
        Color::White => to,
        Color::Black => 25 - to,
    };
    if !pool.contains(distance) {
        return Err(MoveError::DieNotAvailable { distance });
    }
    let to_idx = usize::from(to - 1);
    if board.is_point_blocked(to_idx, color) {
        return Err(MoveError::Blocked { point: to });
    }
    Ok(ValidatedMove::Enter {
        to: to_idx,
        die: distance,
        hit: board.can_hit_blot(to_idx, color),
    })
}

/// Every single-checker move `color` can make with the unused dice, without
/// duplicates. While checkers wait on the bar only entries are listed.
pub fn legal_moves(board: &Board, color: Color, pool: &DicePool) -> Vec<CandidateMove> {
    let dice = pool.distinct();
    let mut out = Vec::new();

    if board.has_checkers_on_bar(color) {
        for &die in &dice {
            let to = entry_point(color, die);
            if validate_entry(board, color, pool, to).is_ok() {
                out.push(CandidateMove {
                    from: color.bar_point(),
                    to,
                    die,
                });
            }
        }
        return out;
    }

    for idx in board.checker_positions(color) {
        let from = idx as u8 + 1;
        for &die in &dice {
            let target = i16::from(from) + i16::from(die) * i16::from(color.direction());
            if (1..=NUM_POINTS as i16).contains(&target) {
                let to = target as u8;
                if validate_move(board, color, pool, from, to).is_ok() {
                    out.push(CandidateMove { from, to, die });
                }
            } else if bears_off_with(board, color, idx, die) {
                out.push(CandidateMove {
                    from,
                    to: color.off_point(),
                    die,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearing_off_board() -> Board {
        let mut b = Board::empty();
        b.place(Color::White, 19, 2).unwrap(); // point 20
        b.place(Color::White, 22, 3).unwrap(); // point 23
        b.place_off(Color::White, 10);
        b.place(Color::Black, 2, 15).unwrap();
        b
    }

    #[test]
    fn larger_die_only_for_rearmost() {
        let b = bearing_off_board();
        let pool = DicePool::from_roll((6, 6));
        assert_eq!(bear_off_die(&b, Color::White, &pool, 19), Ok(6));
        assert_eq!(
            bear_off_die(&b, Color::White, &pool, 22),
            Err(MoveError::NotRearmostChecker { point: 23 })
        );
    }

    #[test]
    fn exact_die_preferred() {
        let b = bearing_off_board();
        let pool = DicePool::from_roll((2, 6));
        assert_eq!(bear_off_die(&b, Color::White, &pool, 22), Ok(2));
    }

    #[test]
    fn backward_move_rejected() {
        let b = Board::standard();
        let pool = DicePool::from_roll((1, 2));
        assert_eq!(
            validate_move(&b, Color::White, &pool, 12, 11),
            Err(MoveError::WrongDirection)
        );
        assert!(validate_move(&b, Color::Black, &pool, 13, 11).is_ok());
    }
}
