use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::GameError;

/// Faces on each die.
pub const DIE_FACES: u8 = 6;

/// A pair of six-sided dice driven by a seedable ChaCha RNG so that whole
/// games can be replayed from their seed.
///
/// # Examples
///
/// ```
/// use backgammon_engine::dice::Dice;
///
/// let mut a = Dice::new_with_seed(9);
/// let mut b = Dice::new_with_seed(9);
/// assert_eq!(a.roll(), b.roll());
/// ```
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha20Rng,
    /// Most recent roll, if any
    last_roll: Option<(u8, u8)>,
}

impl Dice {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            last_roll: None,
        }
    }

    /// Draws two independent uniform values in 1..=6.
    pub fn roll(&mut self) -> (u8, u8) {
        let d1 = self.rng.random_range(1..=DIE_FACES);
        let d2 = self.rng.random_range(1..=DIE_FACES);
        self.last_roll = Some((d1, d2));
        (d1, d2)
    }

    pub fn last_roll(&self) -> Option<(u8, u8)> {
        self.last_roll
    }

    /// Records a roll made elsewhere (physical dice, replays).
    pub fn set_last_roll(&mut self, roll: (u8, u8)) -> Result<(), GameError> {
        validate_die(roll.0)?;
        validate_die(roll.1)?;
        self.last_roll = Some(roll);
        Ok(())
    }

    pub fn is_double(roll: (u8, u8)) -> bool {
        roll.0 == roll.1
    }

    /// Move units a roll grants: four of the value for a double, else both values.
    pub fn moves(roll: (u8, u8)) -> DicePool {
        DicePool::from_roll(roll)
    }
}

pub(crate) fn validate_die(value: u8) -> Result<u8, GameError> {
    if (1..=DIE_FACES).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::InvalidDieValue { value })
    }
}

/// Die values still unused this turn: a bounded multiset of at most four
/// entries that shrinks by one per consumed move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool(SmallVec<[u8; 4]>);

impl DicePool {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_roll(roll: (u8, u8)) -> Self {
        if Dice::is_double(roll) {
            Self(SmallVec::from_buf([roll.0; 4]))
        } else {
            Self(SmallVec::from_slice(&[roll.0, roll.1]))
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, value: u8) -> bool {
        self.0.contains(&value)
    }

    /// Distinct values in ascending order.
    pub fn distinct(&self) -> SmallVec<[u8; 4]> {
        let mut v = self.0.clone();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Smallest value strictly greater than `distance`, if any.
    pub fn smallest_above(&self, distance: u8) -> Option<u8> {
        self.0.iter().copied().filter(|&d| d > distance).min()
    }

    /// Removes one occurrence of `value`; false when it is not present.
    pub fn take(&mut self, value: u8) -> bool {
        match self.0.iter().position(|&d| d == value) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Checks the shape restored from a snapshot.
    pub(crate) fn validate(&self) -> Result<(), GameError> {
        if self.0.len() > 4 {
            return Err(GameError::InvalidSnapshot(format!(
                "die pool holds {} values",
                self.0.len()
            )));
        }
        for &d in &self.0 {
            validate_die(d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_takes_one_occurrence() {
        let mut pool = DicePool::from_roll((3, 3));
        assert!(pool.take(3));
        assert_eq!(pool.values(), &[3, 3, 3]);
        assert!(!pool.take(5));
        assert_eq!(pool.distinct().as_slice(), &[3]);
    }

    #[test]
    fn smallest_above_skips_exact() {
        let pool = DicePool::from_roll((2, 6));
        assert_eq!(pool.smallest_above(1), Some(2));
        assert_eq!(pool.smallest_above(2), Some(6));
        assert_eq!(pool.smallest_above(6), None);
    }
}
