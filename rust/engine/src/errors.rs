use thiserror::Error;

use crate::player::Color;

/// Phase and precondition violations raised by the engine.
///
/// These are programming errors on the caller's side (acting in the wrong phase,
/// bad names, malformed snapshots). Ordinary move-legality failures are not
/// errors; see [`crate::rules::MoveError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player names must not be empty")]
    EmptyPlayerName,
    #[error("Player names must be distinct (both are {name:?})")]
    DuplicatePlayerNames { name: String },
    #[error("Match score must not be negative: {score}")]
    NegativeScore { score: i64 },
    #[error("Match score is out of range: {score}")]
    ScoreOutOfRange { score: i64 },
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game already finished")]
    GameFinished,
    #[error("Dice have not been rolled this turn")]
    DiceNotRolled,
    #[error("Invalid die value: {value}")]
    InvalidDieValue { value: u8 },
    #[error("Invalid point index: {point}")]
    InvalidPoint { point: usize },
    #[error("No checkers to remove at point index {point}")]
    EmptyPoint { point: usize },
    #[error("No {color} checkers on the bar")]
    EmptyBar { color: Color },
    #[error("Point index {point} is held by the opponent")]
    PointOccupied { point: usize },
    #[error("A double has already been offered")]
    DoubleAlreadyOffered,
    #[error("The cube belongs to {color}'s opponent")]
    CubeNotOwned { color: Color },
    #[error("A double was already declined in this game")]
    DoubleDeclined,
    #[error("No double has been offered")]
    NoDoubleOffered,
    #[error("Invalid game snapshot: {0}")]
    InvalidSnapshot(String),
}
