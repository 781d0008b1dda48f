//! Straight-line step directions and direction sets.

use std::fmt::{self, Display};

/// One of the eight unit steps between neighboring grid cells.
///
/// Words are placed and read by repeatedly applying a single direction, so a
/// word always occupies a straight horizontal, vertical, or diagonal run.
///
/// # Examples
///
/// ```
/// use wordseek_core::Direction;
///
/// assert_eq!(Direction::DownLeft.delta(), (1, -1));
/// assert_eq!(Direction::from_delta(-1, 0), Some(Direction::Up));
/// assert_eq!(Direction::Right.reversed(), Direction::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Right,
    /// Top to bottom along a column.
    Down,
    /// Diagonally towards the bottom-right corner.
    DownRight,
    /// Diagonally towards the bottom-left corner.
    DownLeft,
    /// Right to left along a row.
    Left,
    /// Bottom to top along a column.
    Up,
    /// Diagonally towards the top-left corner.
    UpLeft,
    /// Diagonally towards the top-right corner.
    UpRight,
}

impl Direction {
    /// All directions, forward-reading ones first.
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Down,
        Self::DownRight,
        Self::DownLeft,
        Self::Left,
        Self::Up,
        Self::UpLeft,
        Self::UpRight,
    ];

    /// Returns the `(d_row, d_col)` step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (-1, 1),
        }
    }

    /// Returns the direction with the given unit step.
    ///
    /// Returns `None` for `(0, 0)` or any component outside `-1..=1`.
    #[must_use]
    pub const fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        match (d_row, d_col) {
            (0, 1) => Some(Self::Right),
            (1, 0) => Some(Self::Down),
            (1, 1) => Some(Self::DownRight),
            (1, -1) => Some(Self::DownLeft),
            (0, -1) => Some(Self::Left),
            (-1, 0) => Some(Self::Up),
            (-1, -1) => Some(Self::UpLeft),
            (-1, 1) => Some(Self::UpRight),
            _ => None,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
        }
    }

    /// Returns the single-direction set containing `self`.
    #[must_use]
    pub const fn flag(self) -> DirectionSet {
        match self {
            Self::Right => DirectionSet::RIGHT,
            Self::Down => DirectionSet::DOWN,
            Self::DownRight => DirectionSet::DOWN_RIGHT,
            Self::DownLeft => DirectionSet::DOWN_LEFT,
            Self::Left => DirectionSet::LEFT,
            Self::Up => DirectionSet::UP,
            Self::UpLeft => DirectionSet::UP_LEFT,
            Self::UpRight => DirectionSet::UP_RIGHT,
        }
    }

    /// Returns a lowercase human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::DownRight => "down-right",
            Self::DownLeft => "down-left",
            Self::Left => "left",
            Self::Up => "up",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of [`Direction`]s a generator may place words along.
    ///
    /// [`DirectionSet::FORWARD`] keeps every word readable left-to-right or
    /// top-to-bottom; [`DirectionSet::all`] also allows backwards words.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordseek_core::{Direction, DirectionSet};
    ///
    /// let forward: Vec<_> = DirectionSet::FORWARD.directions().collect();
    /// assert_eq!(
    ///     forward,
    ///     [Direction::Right, Direction::Down, Direction::DownRight, Direction::DownLeft]
    /// );
    /// assert_eq!(DirectionSet::all().len(), 8);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Right`].
        const RIGHT = 1 << 0;
        /// [`Direction::Down`].
        const DOWN = 1 << 1;
        /// [`Direction::DownRight`].
        const DOWN_RIGHT = 1 << 2;
        /// [`Direction::DownLeft`].
        const DOWN_LEFT = 1 << 3;
        /// [`Direction::Left`].
        const LEFT = 1 << 4;
        /// [`Direction::Up`].
        const UP = 1 << 5;
        /// [`Direction::UpLeft`].
        const UP_LEFT = 1 << 6;
        /// [`Direction::UpRight`].
        const UP_RIGHT = 1 << 7;

        /// Right, down, and the two downward diagonals.
        const FORWARD = Self::RIGHT.bits()
            | Self::DOWN.bits()
            | Self::DOWN_RIGHT.bits()
            | Self::DOWN_LEFT.bits();
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` is a member of this set.
    #[must_use]
    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Iterates over the member directions in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.allows(*direction))
    }

    /// Returns the number of member directions.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}
