use serde::{Deserialize, Serialize};

use crate::player::Color;

/// Where a checker currently is. Exactly one tag applies at any time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// On a point, by zero-based index 0..=23
    OnPoint(u8),
    /// Hit and waiting to re-enter
    Bar,
    /// Borne off
    Off,
}

/// A single checker. Checkers are created when a board is set up and never
/// destroyed; the board relocates them through its primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Checker {
    /// Color of the owning player
    owner: Color,
    /// Current location tag
    location: Location,
}

impl Checker {
    pub fn new(owner: Color, location: Location) -> Self {
        Self { owner, location }
    }

    pub fn owner(&self) -> Color {
        self.owner
    }
    pub fn location(&self) -> Location {
        self.location
    }

    /// Zero-based point index, if the checker stands on a point.
    pub fn point(&self) -> Option<usize> {
        match self.location {
            Location::OnPoint(i) => Some(i as usize),
            _ => None,
        }
    }

    pub fn is_on_board(&self) -> bool {
        matches!(self.location, Location::OnPoint(_))
    }
    pub fn is_on_bar(&self) -> bool {
        self.location == Location::Bar
    }
    pub fn is_off(&self) -> bool {
        self.location == Location::Off
    }

    pub fn is_in_home_board(&self) -> bool {
        self.point()
            .is_some_and(|i| self.owner.home_board().contains(&i))
    }

    /// A checker may be borne off only from its own home board.
    pub fn can_bear_off(&self) -> bool {
        self.is_in_home_board()
    }

    /// Distance still to travel; zero unless on a point.
    pub fn pip_value(&self) -> u32 {
        self.point()
            .map_or(0, |i| self.owner.pip_distance(i))
    }

    /// Whether `target` (zero-based) lies ahead of this checker.
    pub fn is_moving_forward(&self, target: usize) -> bool {
        match self.point() {
            Some(i) => (target as i32 - i as i32) * i32::from(self.owner.direction()) > 0,
            None => false,
        }
    }

    pub(crate) fn move_to_point(&mut self, index: usize) {
        self.location = Location::OnPoint(index as u8);
    }
    pub(crate) fn move_to_bar(&mut self) {
        self.location = Location::Bar;
    }
    pub(crate) fn move_off(&mut self) {
        self.location = Location::Off;
    }
}
