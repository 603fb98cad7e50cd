//! Snake Body and Movement
//!
//! The body is a queue bounded by `length`: a move pushes a new head and drops
//! whatever exceeds `length` from the tail.

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

use crate::core::grid::Cell;
use crate::game::direction::{Direction, Turn};

/// The player's snake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Occupied cells, head first. Never empty.
    pub segments: VecDeque<Cell>,

    /// Target number of segments
    pub length: usize,

    /// Current heading
    pub direction: Direction,
}

impl Snake {
    /// Create a snake from its cells (head first).
    ///
    /// `length` starts at the number of cells given. Callers must pass at
    /// least one cell; `GameConfig::validate` enforces this for the
    /// starting snake.
    pub fn new(segments: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let segments: VecDeque<Cell> = segments.into_iter().collect();
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");
        let length = segments.len();
        Self {
            segments,
            length,
            direction,
        }
    }

    /// Head cell.
    #[inline]
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Last cell.
    #[inline]
    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    /// Where the head would be after one move, without moving.
    #[inline]
    pub fn next_head(&self) -> Cell {
        let (dx, dy) = self.direction.delta();
        self.head().offset(dx, dy)
    }

    /// Change heading by one step of the cycle.
    #[inline]
    pub fn turn(&mut self, turn: Turn) {
        self.direction = self.direction.turned(turn);
    }

    /// Cells behind the head.
    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter().skip(1)
    }

    /// Does any segment (head included) occupy `cell`?
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Does any segment behind the head occupy `cell`?
    pub fn body_occupies(&self, cell: Cell) -> bool {
        self.body().any(|segment| *segment == cell)
    }

    /// Grow by one: insert `new_head` and keep the tail this time.
    pub fn grow(&mut self, new_head: Cell) {
        self.length += 1;
        self.segments.push_front(new_head);
        self.segments.truncate(self.length);
    }

    /// Number of segments currently on the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a constructed snake.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Advance the snake one cell in its current direction.
///
/// Prepends the new head and truncates to `length`, dropping the tail.
pub fn move_snake(snake: &mut Snake) {
    let head = snake.next_head();
    snake.segments.push_front(head);
    snake.segments.truncate(snake.length);
}
