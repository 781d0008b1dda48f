//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by puzzle generation, selection
//! matching, and front-ends.
//!
//! # Overview
//!
//! 1. **Grid geometry**
//!    - [`position`]: `(row, col)` coordinates on a square grid
//!    - [`direction`]: the eight straight-line step vectors and [`DirectionSet`]
//!
//! 2. **Letters and grids**
//!    - [`letter`]: type-safe uppercase Latin letters `A`..=`Z`
//!    - [`grid`]: the fully populated square [`LetterGrid`]
//!
//! 3. **Target words**
//!    - [`word`]: validated [`Word`]s and clue-carrying [`WordEntry`] values
//!    - [`word_list`]: ordered [`WordList`]s parsed from `WORD|CLUE` text
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{Direction, LetterGrid, Position, Word};
//!
//! let grid: LetterGrid = "
//!     CAT
//!     XOX
//!     XXW
//! "
//! .parse()?;
//!
//! let word = Word::new("cow")?;
//! let start = Position::new(0, 0);
//! let letters = grid.read_line(start, Direction::DownRight, word.len());
//! assert_eq!(letters.as_deref(), Some("COW"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod position;
pub mod word;
pub mod word_list;

pub use self::{
    direction::{Direction, DirectionSet},
    grid::{LetterGrid, ParseGridError},
    letter::Letter,
    position::Position,
    word::{Word, WordEntry, WordError},
    word_list::{DEFAULT_WORD_COUNT, ParseWordListError, WordList},
};
