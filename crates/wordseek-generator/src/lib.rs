//! Word-search grid generation.
//!
//! [`PuzzleGenerator`] places an ordered list of words onto a square grid along
//! straight lines, lets later words cross earlier ones where letters agree,
//! and fills every remaining cell with a random letter.
//!
//! Every run is driven by a [`PuzzleSeed`], so a puzzle can be reproduced from
//! its seed and configuration. Callers that need an unbroken stream of
//! randomness can inject their own generator with
//! [`PuzzleGenerator::generate_with_rng`].
//!
//! Placement is best-effort: a word that does not fit within the attempt
//! budget is logged and reported by [`GeneratedPuzzle::unplaced`]. Use
//! [`PuzzleGenerator::generate_complete`] to regenerate with derived seeds
//! until every word is on the grid.
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{DirectionSet, WordList};
//! use wordseek_generator::{GeneratorConfig, GridSize, PuzzleGenerator, PuzzleSeed};
//!
//! let words: WordList = "CAT|Purrs\nDOG|Barks".parse()?;
//! let generator = PuzzleGenerator::new(
//!     GeneratorConfig::classic()
//!         .size(GridSize::Fixed(8))
//!         .directions(DirectionSet::FORWARD),
//! );
//!
//! let puzzle = generator.generate_complete(words.entries(), PuzzleSeed::random(), 10)?;
//! assert!(puzzle.is_complete());
//! println!("{}", puzzle.grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    config::{
        CLASSIC_MAX_ATTEMPTS, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GeneratorConfig, GridSize,
        MAX_GRID_SIZE,
    },
    generator::{GenerateError, GeneratedGrid, GeneratedPuzzle, PuzzleGenerator},
    placement::Placement,
    seed::{ParseSeedError, PuzzleSeed},
};

mod config;
mod draft;
mod generator;
mod placement;
mod seed;
