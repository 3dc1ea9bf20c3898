//! Grid coordinates.

use core::fmt;

/// A single square on a grid, addressed by zero-based `(x, y)` coordinates.
///
/// `x` counts rows and `y` counts columns. Values may lie outside any
/// particular grid; the grid rejects them when they are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Squares of the 3×3 block centered on this one, the square itself
    /// included. Entries may fall outside the grid.
    pub fn neighborhood(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dx| {
            (-1..=1).map(move |dy| Position::new(self.x + dx, self.y + dy))
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
