use serde::{Deserialize, Serialize};

use crate::checker::{Checker, Location};
use crate::errors::GameError;
use crate::player::{Color, CHECKERS_PER_PLAYER};

/// Number of points on the board.
pub const NUM_POINTS: usize = 24;

/// Standard opening layout for white as (zero-based index, count); black
/// mirrors it through [`Board::opposite_point`].
const OPENING: [(usize, usize); 4] = [(0, 2), (11, 5), (16, 3), (18, 5)];

/// The playing surface: 24 point stacks, a bar and a bear-off tray per color.
///
/// Points are addressed by zero-based index here; the game layer converts
/// the external 1..=24 numbering. All mutation goes through the primitives
/// below, which keep every checker's [`Location`] in step with the container
/// holding it and never let two colors share a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Point stacks, index 0 = point 1
    points: [Vec<Checker>; NUM_POINTS],
    /// Hit checkers per color (white first)
    bar: [Vec<Checker>; 2],
    /// Borne-off checkers per color (white first)
    off: [Vec<Checker>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            points: std::array::from_fn(|_| Vec::new()),
            bar: [Vec::new(), Vec::new()],
            off: [Vec::new(), Vec::new()],
        }
    }

    /// Board in the standard starting position (2/5/3/5 per side).
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    pub fn setup_initial_position(&mut self) {
        self.reset();
        for &(index, count) in &OPENING {
            self.points[index] = vec![Checker::new(Color::White, Location::OnPoint(index as u8)); count];
            let mirrored = Self::opposite_point(index);
            self.points[mirrored] =
                vec![Checker::new(Color::Black, Location::OnPoint(mirrored as u8)); count];
        }
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// True when no checker of either color is anywhere on the board.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Vec::is_empty)
            && self.bar.iter().all(Vec::is_empty)
            && self.off.iter().all(Vec::is_empty)
    }

    pub fn is_valid_point(index: usize) -> bool {
        index < NUM_POINTS
    }

    pub fn opposite_point(index: usize) -> usize {
        NUM_POINTS - 1 - index
    }

    fn check_point(index: usize) -> Result<(), GameError> {
        if Self::is_valid_point(index) {
            Ok(())
        } else {
            Err(GameError::InvalidPoint { point: index })
        }
    }

    // --- point queries ---

    /// Checkers on a point, bottom first; empty for an invalid index.
    pub fn stack(&self, index: usize) -> &[Checker] {
        self.points.get(index).map_or(&[][..], Vec::as_slice)
    }

    pub fn is_point_empty(&self, index: usize) -> bool {
        self.stack(index).is_empty()
    }

    pub fn point_owner(&self, index: usize) -> Option<Color> {
        self.stack(index).first().map(Checker::owner)
    }

    pub fn checker_count(&self, index: usize) -> usize {
        self.stack(index).len()
    }

    pub fn has_blot(&self, index: usize) -> bool {
        self.checker_count(index) == 1
    }

    /// A single opposing checker sits on the point.
    pub fn can_hit_blot(&self, index: usize, color: Color) -> bool {
        self.has_blot(index) && self.point_owner(index) == Some(color.opponent())
    }

    /// Empty, own, or an opposing blot.
    pub fn can_place_checker(&self, index: usize, color: Color) -> bool {
        Self::is_valid_point(index) && !self.is_point_blocked(index, color)
    }

    /// Two or more opposing checkers hold the point.
    pub fn is_point_blocked(&self, index: usize, color: Color) -> bool {
        self.point_owner(index) == Some(color.opponent()) && self.checker_count(index) >= 2
    }

    pub fn is_in_home_board(index: usize, color: Color) -> bool {
        color.home_board().contains(&index)
    }

    // --- point primitives ---

    /// Pushes a checker onto a point and tags it with that point.
    pub fn add_checker_to_point(&mut self, index: usize, mut checker: Checker) -> Result<(), GameError> {
        Self::check_point(index)?;
        if self.point_owner(index) == Some(checker.owner().opponent()) {
            return Err(GameError::PointOccupied { point: index });
        }
        checker.move_to_point(index);
        self.points[index].push(checker);
        Ok(())
    }

    pub fn remove_checker_from_point(&mut self, index: usize) -> Result<Checker, GameError> {
        Self::check_point(index)?;
        self.points[index]
            .pop()
            .ok_or(GameError::EmptyPoint { point: index })
    }

    /// Sends the opposing blot on `index` to its owner's bar.
    pub fn hit_blot(&mut self, index: usize, color: Color) -> Result<Checker, GameError> {
        if !self.can_hit_blot(index, color) {
            return Err(GameError::PointOccupied { point: index });
        }
        let hit = self.remove_checker_from_point(index)?;
        self.add_checker_to_bar(hit);
        Ok(hit)
    }

    // --- bar and bear-off ---

    pub fn bar(&self, color: Color) -> &[Checker] {
        &self.bar[color.index()]
    }

    pub fn bar_count(&self, color: Color) -> usize {
        self.bar[color.index()].len()
    }

    pub fn has_checkers_on_bar(&self, color: Color) -> bool {
        self.bar_count(color) > 0
    }

    pub fn add_checker_to_bar(&mut self, mut checker: Checker) {
        checker.move_to_bar();
        self.bar[checker.owner().index()].push(checker);
    }

    pub fn remove_checker_from_bar(&mut self, color: Color) -> Result<Checker, GameError> {
        self.bar[color.index()]
            .pop()
            .ok_or(GameError::EmptyBar { color })
    }

    pub fn off(&self, color: Color) -> &[Checker] {
        &self.off[color.index()]
    }

    pub fn off_count(&self, color: Color) -> usize {
        self.off[color.index()].len()
    }

    pub fn add_checker_off(&mut self, mut checker: Checker) {
        checker.move_off();
        self.off[checker.owner().index()].push(checker);
    }

    // --- set-up helpers ---

    /// Places `count` new checkers of `color` on a point.
    pub fn place(&mut self, color: Color, index: usize, count: usize) -> Result<(), GameError> {
        for _ in 0..count {
            self.add_checker_to_point(index, Checker::new(color, Location::OnPoint(0)))?;
        }
        Ok(())
    }

    pub fn place_on_bar(&mut self, color: Color, count: usize) {
        for _ in 0..count {
            self.add_checker_to_bar(Checker::new(color, Location::Bar));
        }
    }

    pub fn place_off(&mut self, color: Color, count: usize) {
        for _ in 0..count {
            self.add_checker_off(Checker::new(color, Location::Off));
        }
    }

    // --- derived queries ---

    pub fn on_board_count(&self, color: Color) -> usize {
        self.points
            .iter()
            .filter(|p| p.first().map(Checker::owner) == Some(color))
            .map(Vec::len)
            .sum()
    }

    /// On-point + bar + borne-off; 15 for each color in a live game.
    pub fn checker_total(&self, color: Color) -> usize {
        self.on_board_count(color) + self.bar_count(color) + self.off_count(color)
    }

    /// Zero-based indices of the points `color` occupies, ascending.
    pub fn checker_positions(&self, color: Color) -> Vec<usize> {
        (0..NUM_POINTS)
            .filter(|&i| self.point_owner(i) == Some(color))
            .collect()
    }

    /// No checker on the bar and none outside the home board.
    pub fn can_bear_off(&self, color: Color) -> bool {
        if self.has_checkers_on_bar(color) {
            return false;
        }
        let home = color.home_board();
        self.checker_positions(color)
            .iter()
            .all(|i| home.contains(i))
    }

    /// The occupied point furthest from bearing off: lowest index for white,
    /// highest for black.
    pub fn furthest_checker(&self, color: Color) -> Option<usize> {
        let occupied = |i: &usize| self.point_owner(*i) == Some(color);
        match color {
            Color::White => (0..NUM_POINTS).find(occupied),
            Color::Black => (0..NUM_POINTS).rev().find(occupied),
        }
    }

    pub fn pip_count(&self, color: Color) -> u32 {
        self.checker_positions(color)
            .into_iter()
            .map(|i| color.pip_distance(i) * self.checker_count(i) as u32)
            .sum()
    }

    /// True once the two sides can no longer hit each other.
    pub fn is_race_position(&self) -> bool {
        let white_rear = self.furthest_checker(Color::White);
        let black_rear = self.furthest_checker(Color::Black);
        match (white_rear, black_rear) {
            (Some(w), Some(b)) => {
                self.bar_count(Color::White) == 0 && self.bar_count(Color::Black) == 0 && w > b
            }
            _ => true,
        }
    }

    /// Verifies location tags, single ownership per point and conservation.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let bad = |msg: String| -> Result<(), GameError> { Err(GameError::InvalidSnapshot(msg)) };
        for (i, stack) in self.points.iter().enumerate() {
            if let Some(first) = stack.first() {
                if stack.iter().any(|c| c.owner() != first.owner()) {
                    return bad(format!("point index {i} mixes colors"));
                }
            }
            if stack.iter().any(|c| c.point() != Some(i)) {
                return bad(format!("checker on point index {i} carries a stale location"));
            }
        }
        for color in [Color::White, Color::Black] {
            if self.bar(color).iter().any(|c| !c.is_on_bar() || c.owner() != color) {
                return bad(format!("{color} bar holds a misplaced checker"));
            }
            if self.off(color).iter().any(|c| !c.is_off() || c.owner() != color) {
                return bad(format!("{color} bear-off tray holds a misplaced checker"));
            }
            let total = self.checker_total(color);
            if total != CHECKERS_PER_PLAYER {
                return bad(format!("{color} has {total} checkers, expected {CHECKERS_PER_PLAYER}"));
            }
        }
        Ok(())
    }
}
