//! Straight-line word placements.

use std::fmt::{self, Display};

use wordseek_core::{Direction, LetterGrid, Position};

/// Where a word was written: a start cell, a direction, and a length.
///
/// The covered cells are `start + i * direction` for `i` in `0..len`.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, Position};
/// use wordseek_generator::Placement;
///
/// let placement = Placement::new(Position::new(2, 2), Direction::UpRight, 3);
/// let cells: Vec<_> = placement.positions().collect();
/// assert_eq!(
///     cells,
///     [Position::new(2, 2), Position::new(1, 3), Position::new(0, 4)]
/// );
/// assert_eq!(placement.end(), Some(Position::new(0, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    start: Position,
    direction: Direction,
    len: usize,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(start: Position, direction: Direction, len: usize) -> Self {
        Self {
            start,
            direction,
            len,
        }
    }

    /// Returns the first cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the reading direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the placement covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the last cell, or `None` for an empty placement or one that
    /// walks off the non-negative quadrant.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.len
            .checked_sub(1)
            .and_then(|last| self.start.step(self.direction, last))
    }

    /// Iterates over the covered cells in reading order.
    ///
    /// Stops early if the walk leaves the non-negative quadrant.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Self {
            start,
            direction,
            len,
        } = *self;
        (0..len).map_while(move |i| start.step(direction, i))
    }

    /// Returns `true` if every covered cell lies inside a `size`×`size` grid.
    #[must_use]
    pub fn fits_within(&self, size: usize) -> bool {
        self.end()
            .is_some_and(|end| end.row() < size && end.col() < size)
            && self.start.row() < size
            && self.start.col() < size
    }

    /// Reads the letters under this placement.
    ///
    /// Returns `None` if the placement leaves the grid.
    #[must_use]
    pub fn read(&self, grid: &LetterGrid) -> Option<String> {
        grid.read_line(self.start, self.direction, self.len)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} x{}", self.start, self.direction, self.len)
    }
}
