use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cube::DoublingCube;
use crate::dice::{validate_die, DicePool};
use crate::errors::GameError;
use crate::player::{Color, Player, CHECKERS_PER_PLAYER};

/// Full position of a game: enough to resume play exactly where it stopped.
///
/// Produced by [`crate::game::Game::save_game_state`] and consumed by
/// [`crate::game::Game::load_game_state`]; round-trips through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub white: Player,
    pub black: Player,
    pub board: Board,
    pub current_player: Color,
    pub started: bool,
    pub finished: bool,
    pub winner: Option<Color>,
    pub dice_rolled: bool,
    pub last_roll: Option<(u8, u8)>,
    pub remaining_dice: DicePool,
    pub turn_number: u32,
    pub moves_count: u32,
    pub cube: DoublingCube,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    pub fn from_json(s: &str) -> Result<Self, GameError> {
        let snap: GameSnapshot =
            serde_json::from_str(s).map_err(|e| GameError::InvalidSnapshot(e.to_string()))?;
        snap.validate()?;
        Ok(snap)
    }

    /// Rejects snapshots that could not have come from a live game.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid =
            |msg: &str| -> Result<(), GameError> { Err(GameError::InvalidSnapshot(msg.to_string())) };
        if self.white.color() != Color::White || self.black.color() != Color::Black {
            return invalid("player colors are swapped");
        }
        if self.white.name().trim().is_empty() || self.black.name().trim().is_empty() {
            return invalid("player names must not be empty");
        }
        if self.white.name() == self.black.name() {
            return invalid("player names must be distinct");
        }
        if self.turn_number == 0 {
            return invalid("turn number starts at 1");
        }
        if self.winner.is_some() && !self.finished {
            return invalid("a winner implies a finished game");
        }
        if !self.dice_rolled && !self.remaining_dice.is_empty() {
            return invalid("unused dice without a roll");
        }
        if let Some((d1, d2)) = self.last_roll {
            validate_die(d1)?;
            validate_die(d2)?;
        }
        self.remaining_dice.validate()?;
        self.cube.validate()?;
        self.board.check_invariants()?;
        if let Some(winner) = self.winner {
            if self.board.off_count(winner) != CHECKERS_PER_PLAYER {
                return invalid("the winner has not borne off every checker");
            }
        }
        Ok(())
    }
}
