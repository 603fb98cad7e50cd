//! Direction State Machine
//!
//! Four headings arranged in a cycle (Up, Right, Down, Left). A turn moves
//! one step along the cycle; it never touches the snake's segments.

use serde::{Serialize, Deserialize};

/// Heading of the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0
    Up = 0,
    /// Towards higher columns
    #[default]
    Right = 1,
    /// Towards higher rows
    Down = 2,
    /// Towards column 0
    Left = 3,
}

/// A relative turn requested by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    /// One step forward in the cycle
    Clockwise,
    /// One step back in the cycle
    AntiClockwise,
}

impl Direction {
    /// Cycle order; clockwise advances through it.
    pub const CYCLE: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Successor in the cycle.
    #[inline]
    pub fn clockwise(self) -> Self {
        Self::CYCLE[(self as usize + 1) % Self::CYCLE.len()]
    }

    /// Predecessor in the cycle.
    #[inline]
    pub fn anticlockwise(self) -> Self {
        Self::CYCLE[(self as usize + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Apply a turn.
    #[inline]
    pub fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Clockwise => self.clockwise(),
            Turn::AntiClockwise => self.anticlockwise(),
        }
    }

    /// Unit displacement `(dx, dy)` for one move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl Turn {
    /// The turn that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::AntiClockwise,
            Turn::AntiClockwise => Turn::Clockwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::Up.clockwise(), Direction::Right);
        assert_eq!(Direction::Right.clockwise(), Direction::Down);
        assert_eq!(Direction::Down.clockwise(), Direction::Left);
        assert_eq!(Direction::Left.clockwise(), Direction::Up);
    }

    #[test]
    fn test_anticlockwise_cycle() {
        assert_eq!(Direction::Up.anticlockwise(), Direction::Left);
        assert_eq!(Direction::Left.anticlockwise(), Direction::Down);
        assert_eq!(Direction::Down.anticlockwise(), Direction::Right);
        assert_eq!(Direction::Right.anticlockwise(), Direction::Up);
    }

    #[test]
    fn test_turn_then_inverse_restores() {
        for dir in Direction::CYCLE {
            for turn in [Turn::Clockwise, Turn::AntiClockwise] {
                assert_eq!(dir.turned(turn).turned(turn.inverse()), dir);
            }
        }
    }

    #[test]
    fn test_four_turns_full_circle() {
        let mut dir = Direction::Right;
        for _ in 0..4 {
            dir = dir.turned(Turn::Clockwise);
        }
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn test_deltas_are_unit() {
        for dir in Direction::CYCLE {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_default_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
