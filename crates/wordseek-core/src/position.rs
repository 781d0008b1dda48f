//! Grid coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell coordinate on a square grid.
///
/// Coordinates are zero-based: `row` grows downwards and `col` grows to the
/// right. A position carries no grid size; bounds are checked by the grid that
/// interprets it.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// assert_eq!(pos.step(Direction::UpLeft, 2), Some(Position::new(0, 1)));
/// assert_eq!(pos.step(Direction::Up, 3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position reached by walking `distance` cells in `direction`.
    ///
    /// Returns `None` if the walk would leave the non-negative quadrant. The
    /// result may still lie outside a particular grid.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = offset(self.row, d_row, distance)?;
        let col = offset(self.col, d_col, distance)?;
        Some(Self { row, col })
    }

    /// Returns the raw `(rows, cols)` displacement from `self` to `other`.
    #[must_use]
    pub fn displacement_to(self, other: Self) -> (isize, isize) {
        (signed_diff(other.row, self.row), signed_diff(other.col, self.col))
    }

    /// Returns the direction leading from `self` to an adjacent `other`.
    ///
    /// Returns `None` if `other` is `self` or not one of its eight neighbors.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        let (d_row, d_col) = self.displacement_to(other);
        Direction::from_delta(d_row, d_col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        1 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

#[expect(clippy::cast_possible_wrap)]
fn signed_diff(a: usize, b: usize) -> isize {
    if a >= b {
        (a - b) as isize
    } else {
        -((b - a) as isize)
    }
}
