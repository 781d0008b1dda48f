//! Square grids of letters.
//!
//! A [`LetterGrid`] is the finished puzzle surface: every cell holds exactly
//! one [`Letter`]. Grids are immutable once built; generators assemble them
//! from a draft and hand them over whole.
//!
//! # Text format
//!
//! [`LetterGrid`] implements [`FromStr`] and [`Display`] with one row per
//! line. Surrounding whitespace and blank lines are ignored, and letters within
//! a row may be separated by spaces. [`Display`] separates letters with a single
//! space, which parses back to the same grid.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Direction, Letter, Position};

/// Errors produced when parsing a [`LetterGrid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contained no rows.
    #[display("grid is empty")]
    Empty,
    /// A row did not have as many letters as there are rows.
    #[display("row {row} has {len} letters, expected {size}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of letters found in the row.
        len: usize,
        /// Expected row length (the number of rows).
        size: usize,
    },
    /// A character outside `A`..=`Z` was found.
    #[display("invalid letter {ch:?} at row {row}")]
    InvalidLetter {
        /// Zero-based index of the offending row.
        row: usize,
        /// The rejected character.
        ch: char,
    },
}

/// A square, fully populated grid of letters stored in row-major order.
///
/// # Examples
///
/// ```
/// use wordseek_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "AB\nCD".parse()?;
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid[Position::new(1, 0)].as_char(), 'C');
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// assert_eq!(grid.to_string(), "A B\nC D");
/// # Ok::<(), wordseek_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Letter>,
}

impl LetterGrid {
    /// Builds a `size`×`size` grid by calling `f` for every position in
    /// row-major order.
    #[must_use]
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> Letter,
    {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .map(&mut f)
            .collect();
        Self { size, cells }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Returns the letter at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.contains(pos)
            .then(|| self.cells[pos.row() * self.size + pos.col()])
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        // `chunks` rejects a zero chunk size.
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Concatenates the letters at `positions`.
    ///
    /// Returns `None` if any position lies outside the grid.
    pub fn read<I>(&self, positions: I) -> Option<String>
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .map(|pos| self.get(pos).map(Letter::as_char))
            .collect()
    }

    /// Reads `len` letters starting at `start` and walking in `direction`.
    ///
    /// Returns `None` if the run leaves the grid.
    #[must_use]
    pub fn read_line(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| start.step(direction, i).and_then(|pos| self.get(pos)))
            .map(|letter| letter.map(Letter::as_char))
            .collect()
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} outside {0}x{0} grid", self.size);
        &self.cells[pos.row() * self.size + pos.col()]
    }
}

impl FromStr for LetterGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| Letter::from_char(ch).ok_or(ParseGridError::InvalidLetter { row, ch }))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = rows.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != size {
                return Err(ParseGridError::NotSquare {
                    row,
                    len: letters.len(),
                    size,
                });
            }
            cells.extend(letters);
        }
        Ok(Self { size, cells })
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(letter, f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str = "
        CATXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXXD
    ";

    #[test]
    fn test_parse_sample_grid() {
        let grid: LetterGrid = SAMPLE.parse().unwrap();
        assert_eq!(grid.size(), 8);
        assert_eq!(grid[Position::new(0, 0)], Letter::from_char('C').unwrap());
        assert_eq!(grid[Position::new(7, 7)], Letter::from_char('D').unwrap());
        assert_eq!(grid.positions().count(), 64);
    }

    #[test]
    fn test_parse_accepts_lowercase_and_spaces() {
        let grid: LetterGrid = "a b\nc d".parse().unwrap();
        assert_eq!(grid.read(grid.positions()).as_deref(), Some("ABCD"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(ParseGridError::Empty));
        assert_eq!("  \n \n".parse::<LetterGrid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(ParseGridError::NotSquare { row: 1, len: 1, size: 2 })
        );
        assert_eq!(
            "A1\nCD".parse::<LetterGrid>(),
            Err(ParseGridError::InvalidLetter { row: 0, ch: '1' })
        );
    }

    #[test]
    fn test_read_and_read_line() {
        let grid: LetterGrid = SAMPLE.parse().unwrap();
        let row0 = [(0, 0), (0, 1), (0, 2)].map(Position::from);
        assert_eq!(grid.read(row0).as_deref(), Some("CAT"));
        assert_eq!(
            grid.read_line(Position::new(0, 2), Direction::Left, 3).as_deref(),
            Some("TAC")
        );
        assert_eq!(grid.read_line(Position::new(0, 6), Direction::Right, 3), None);
        assert_eq!(grid.read([Position::new(8, 0)]), None);
    }

    #[test]
    fn test_from_fn_fills_row_major() {
        let grid = LetterGrid::from_fn(3, |pos| Letter::from_index(pos.row() * 3 + pos.col()));
        assert_eq!(grid.to_string(), "A B C\nD E F\nG H I");
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid: LetterGrid = "AB\nCD".parse().unwrap();
        let _ = grid[Position::new(0, 2)];
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(size in 1usize..10, seed in any::<u64>()) {
            let grid = LetterGrid::from_fn(size, |pos| {
                let mixed = seed
                    .wrapping_mul(31)
                    .wrapping_add((pos.row() * size + pos.col()) as u64);
                Letter::from_index((mixed % 26) as usize)
            });
            let parsed: LetterGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
