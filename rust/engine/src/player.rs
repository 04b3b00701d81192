use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Number of checkers each side owns for the whole match.
pub const CHECKERS_PER_PLAYER: usize = 15;

/// Seat names used when a game is created without names.
pub const DEFAULT_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Checker color, which also fixes the direction of travel.
///
/// White moves from low to high point numbers, bears off past point 24
/// (the "25" sentinel) and has its home board on points 19-24. Black moves
/// from high to low, bears off past point 1 (the "0" sentinel) and has its
/// home board on points 1-6.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// First player, moves 1 -> 24
    White,
    /// Second player, moves 24 -> 1
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot of this color in per-color arrays (white first).
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Zero-based point indices of this color's home board.
    pub fn home_board(self) -> RangeInclusive<usize> {
        match self {
            Color::White => 18..=23,
            Color::Black => 0..=5,
        }
    }

    /// External point number used as the bear-off destination.
    pub fn off_point(self) -> u8 {
        match self {
            Color::White => 25,
            Color::Black => 0,
        }
    }

    /// External point number a checker on the bar is considered to stand on.
    pub fn bar_point(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 25,
        }
    }

    /// External point numbers where a checker may re-enter from the bar.
    pub fn entry_points(self) -> RangeInclusive<u8> {
        match self {
            Color::White => 1..=6,
            Color::Black => 19..=24,
        }
    }

    /// +1 when this color moves toward higher point numbers, -1 otherwise.
    pub fn direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pips a checker on the given zero-based index still has to travel.
    pub fn pip_distance(self, index: usize) -> u32 {
        match self {
            Color::White => 24 - index as u32,
            Color::Black => index as u32 + 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// A participant in the match: a display name, a fixed color and the running
/// match score. Holds no board state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name (non-empty)
    name: String,
    /// Color assigned at creation
    color: Color,
    /// Points won so far in the match
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self {
            name,
            color,
            score: 0,
        })
    }

    pub(crate) fn default_for(color: Color) -> Self {
        Self {
            name: DEFAULT_NAMES[color.index()].to_string(),
            color,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: i64) -> Result<(), GameError> {
        if score < 0 {
            return Err(GameError::NegativeScore { score });
        }
        self.score = u32::try_from(score).map_err(|_| GameError::ScoreOutOfRange { score })?;
        Ok(())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
