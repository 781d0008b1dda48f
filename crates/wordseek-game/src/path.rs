//! Selection paths and straight-line validation.

use wordseek_core::{Direction, Position};

/// Returns `true` if `path` is a legal straight-line selection.
///
/// - An empty path is illegal.
/// - A single cell is legal.
/// - Otherwise the first two cells must be neighbors, which fixes a step
///   direction, and every later pair of consecutive cells must repeat exactly
///   that step. This rules out bends, gaps, and repeated cells.
///
/// # Examples
///
/// ```
/// use wordseek_core::Position;
/// use wordseek_game::is_legal_path;
///
/// let straight = [(0, 0), (0, 1), (0, 2)].map(Position::from);
/// let bent = [(0, 0), (1, 1), (2, 1)].map(Position::from);
/// let repeated = [(3, 3), (3, 3)].map(Position::from);
///
/// assert!(is_legal_path(&straight));
/// assert!(!is_legal_path(&bent));
/// assert!(!is_legal_path(&repeated));
/// assert!(is_legal_path(&[Position::new(4, 4)]));
/// assert!(!is_legal_path(&[]));
/// ```
#[must_use]
pub fn is_legal_path(path: &[Position]) -> bool {
    match path {
        [] => false,
        [_] => true,
        [first, second, ..] => {
            let Some(step) = first.direction_to(*second) else {
                return false;
            };
            path.windows(2)
                .all(|pair| pair[0].direction_to(pair[1]) == Some(step))
        }
    }
}

/// What happened when a cell was offered to a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ExtendOutcome {
    /// The cell was appended.
    Extended,
    /// No selection is in progress.
    NotSelecting,
    /// The cell lies outside the grid.
    OutsideGrid,
    /// The cell is already part of the path.
    AlreadySelected,
    /// The cell is not a neighbor of the last selected cell.
    NotAdjacent,
    /// The cell is a neighbor, but in a different direction than the path's.
    WrongDirection,
}

/// An ordered run of grid cells traced by one selection gesture.
///
/// Paths built with [`SelectionPath::new`] and [`SelectionPath::try_extend`]
/// are always legal. [`SelectionPath::from_positions`] accepts arbitrary
/// input so that raw pointer traces can be validated with
/// [`SelectionPath::is_legal`].
///
/// # Examples
///
/// ```
/// use wordseek_core::{Direction, Position};
/// use wordseek_game::{ExtendOutcome, SelectionPath};
///
/// let mut path = SelectionPath::new(Position::new(2, 2));
/// assert_eq!(path.try_extend(Position::new(3, 3)), ExtendOutcome::Extended);
/// assert_eq!(path.direction(), Some(Direction::DownRight));
///
/// // Bending away from the established direction is ignored.
/// assert_eq!(path.try_extend(Position::new(4, 3)), ExtendOutcome::WrongDirection);
/// assert_eq!(path.try_extend(Position::new(4, 4)), ExtendOutcome::Extended);
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionPath {
    cells: Vec<Position>,
}

impl SelectionPath {
    /// Starts a path at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self { cells: vec![start] }
    }

    /// Wraps an arbitrary sequence of cells without validating it.
    #[must_use]
    pub fn from_positions<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Returns the cells in selection order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the first cell.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Returns the most recently added cell.
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Returns the step direction fixed by the first two cells.
    ///
    /// Returns `None` for paths shorter than two cells or whose first two cells
    /// are not neighbors.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.cells.as_slice() {
            [first, second, ..] => first.direction_to(*second),
            _ => None,
        }
    }

    /// Returns `true` if the path is a legal straight line.
    ///
    /// See [`is_legal_path`].
    #[must_use]
    pub fn is_legal(&self) -> bool {
        is_legal_path(&self.cells)
    }

    /// Returns `true` if `pos` is already part of the path.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the same cells in the opposite order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            cells: self.cells.iter().rev().copied().collect(),
        }
    }

    /// Appends `pos` if it continues the path in a straight line.
    ///
    /// The second cell may be any neighbor of the first and fixes the
    /// direction; every later cell must be the next cell in that direction.
    /// Cells that do not qualify leave the path unchanged.
    pub fn try_extend(&mut self, pos: Position) -> ExtendOutcome {
        if self.contains(pos) {
            return ExtendOutcome::AlreadySelected;
        }
        let Some(last) = self.last() else {
            self.cells.push(pos);
            return ExtendOutcome::Extended;
        };
        let Some(step) = last.direction_to(pos) else {
            return ExtendOutcome::NotAdjacent;
        };
        match self.direction() {
            Some(direction) if direction != step => ExtendOutcome::WrongDirection,
            _ => {
                self.cells.push(pos);
                ExtendOutcome::Extended
            }
        }
    }
}

impl From<SelectionPath> for Vec<Position> {
    fn from(path: SelectionPath) -> Self {
        path.cells
    }
}
