use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Color;

/// Doubling-cube state: the current stake multiplier, who may turn it next,
/// and any offer awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublingCube {
    /// Current stake multiplier (1, 2, 4, ...)
    value: u32,
    /// Player holding the cube after an accepted double; `None` while centered
    owner: Option<Color>,
    /// Player whose offer is pending
    offered_by: Option<Color>,
    /// Player who refused a double, ending the game
    declined_by: Option<Color>,
}

impl Default for DoublingCube {
    fn default() -> Self {
        Self {
            value: 1,
            owner: None,
            offered_by: None,
            declined_by: None,
        }
    }
}

impl DoublingCube {
    pub fn value(&self) -> u32 {
        self.value
    }
    pub fn owner(&self) -> Option<Color> {
        self.owner
    }
    pub fn offered_by(&self) -> Option<Color> {
        self.offered_by
    }
    pub fn declined_by(&self) -> Option<Color> {
        self.declined_by
    }
    pub fn is_offered(&self) -> bool {
        self.offered_by.is_some()
    }

    /// Nothing pending, not yet declined, and the cube is centered or held by `color`.
    pub fn can_offer(&self, color: Color) -> bool {
        self.offered_by.is_none()
            && self.declined_by.is_none()
            && self.owner != Some(color.opponent())
    }

    pub fn offer(&mut self, color: Color) -> Result<(), GameError> {
        if self.offered_by.is_some() {
            return Err(GameError::DoubleAlreadyOffered);
        }
        if self.declined_by.is_some() {
            return Err(GameError::DoubleDeclined);
        }
        if self.owner == Some(color.opponent()) {
            return Err(GameError::CubeNotOwned { color });
        }
        self.offered_by = Some(color);
        Ok(())
    }

    /// Doubles the stake; the accepting side takes the cube. Returns the new value.
    pub fn accept(&mut self) -> Result<u32, GameError> {
        let offered_by = self.offered_by.take().ok_or(GameError::NoDoubleOffered)?;
        self.value = self.value.saturating_mul(2);
        self.owner = Some(offered_by.opponent());
        Ok(self.value)
    }

    /// Records the refusal and returns the player whose offer was refused.
    pub fn decline(&mut self) -> Result<Color, GameError> {
        let offered_by = self.offered_by.take().ok_or(GameError::NoDoubleOffered)?;
        self.declined_by = Some(offered_by.opponent());
        Ok(offered_by)
    }

    /// Forgets a refusal so a restarted game can double again; value and
    /// owner are kept.
    pub fn clear_decline(&mut self) {
        self.declined_by = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn validate(&self) -> Result<(), GameError> {
        if !self.value.is_power_of_two() {
            return Err(GameError::InvalidSnapshot(format!(
                "cube value {} is not a power of two",
                self.value
            )));
        }
        Ok(())
    }
}
