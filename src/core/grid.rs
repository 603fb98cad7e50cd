//! Grid Geometry
//!
//! Integer cell coordinates and the playable rectangle derived from the
//! screen layout (border thickness, header offset, cell size).

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single grid cell, occupied by a snake segment, food, or an obstacle.
///
/// `x` grows to the right, `y` grows downward (screen convention).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another cell.
    #[inline]
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` shares an edge with this cell.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive rectangle of cells the snake may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayArea {
    /// Leftmost playable column
    pub min_x: i32,
    /// Topmost playable row
    pub min_y: i32,
    /// Rightmost playable column
    pub max_x: i32,
    /// Bottom playable row
    pub max_y: i32,
}

impl PlayArea {
    /// Derive the play area from screen geometry in pixels.
    ///
    /// A cell `(x, y)` is playable when its whole square lies inside the
    /// border: `x*S >= B`, `y*S >= B`, `(x+1)*S <= W-B` and
    /// `(y+1)*S <= H-header-B`.
    pub fn from_screen(
        screen_width: i32,
        screen_height: i32,
        border_width: i32,
        header_height: i32,
        cell_size: i32,
    ) -> Self {
        let min = ceil_div(border_width, cell_size);
        Self {
            min_x: min,
            min_y: min,
            max_x: (screen_width - border_width).div_euclid(cell_size) - 1,
            max_y: (screen_height - header_height - border_width).div_euclid(cell_size) - 1,
        }
    }

    /// Is the cell inside the rectangle?
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    /// Number of columns (0 if empty).
    #[inline]
    pub fn width(&self) -> i32 {
        (self.max_x - self.min_x + 1).max(0)
    }

    /// Number of rows (0 if empty).
    #[inline]
    pub fn height(&self) -> i32 {
        (self.max_y - self.min_y + 1).max(0)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// True if the rectangle holds no cells.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The same rectangle with `margin` cells removed on every side.
    pub fn shrink(&self, margin: i32) -> Self {
        Self {
            min_x: self.min_x + margin,
            min_y: self.min_y + margin,
            max_x: self.max_x - margin,
            max_y: self.max_y - margin,
        }
    }
}

#[inline]
fn ceil_div(value: i32, divisor: i32) -> i32 {
    (value + divisor - 1).div_euclid(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_area() {
        // 640x480 screen, 10px border, 40px header, 10px cells
        let area = PlayArea::from_screen(640, 480, 10, 40, 10);

        assert_eq!(area.min_x, 1);
        assert_eq!(area.min_y, 1);
        assert_eq!(area.max_x, 62);
        assert_eq!(area.max_y, 42);
        assert_eq!(area.cell_count(), 62 * 42);
    }

    #[test]
    fn test_border_not_multiple_of_cell() {
        // 15px border with 10px cells: column 1 starts at 10px, still inside the border
        let area = PlayArea::from_screen(200, 200, 15, 0, 10);
        assert_eq!(area.min_x, 2);
        assert_eq!(area.max_x, 17);
    }

    #[test]
    fn test_contains_edges() {
        let area = PlayArea::from_screen(640, 480, 10, 40, 10);

        assert!(area.contains(Cell::new(1, 1)));
        assert!(area.contains(Cell::new(62, 42)));
        assert!(!area.contains(Cell::new(0, 5)));
        assert!(!area.contains(Cell::new(63, 5)));
        assert!(!area.contains(Cell::new(5, 43)));
        assert!(!area.contains(Cell::new(5, -1)));
    }

    #[test]
    fn test_shrink_and_empty() {
        let area = PlayArea { min_x: 0, min_y: 0, max_x: 3, max_y: 3 };

        let inner = area.shrink(1);
        assert_eq!(inner.cell_count(), 4);
        assert!(!inner.is_empty());

        assert!(area.shrink(2).is_empty());
        assert_eq!(area.shrink(3).cell_count(), 0);
    }

    #[test]
    fn test_adjacency() {
        let c = Cell::new(4, 4);
        assert!(c.is_adjacent(Cell::new(5, 4)));
        assert!(c.is_adjacent(Cell::new(4, 3)));
        assert!(!c.is_adjacent(Cell::new(5, 5)));
        assert!(!c.is_adjacent(c));
    }
}
