//! Word-search game state and selection matching.
//!
//! A player selects a run of cells by pressing on one cell and dragging in a
//! straight line. This crate turns those gestures into found words:
//!
//! - [`is_legal_path`] decides whether a sequence of cells is a straight line.
//! - [`match_path`] reads the letters under a path and compares them with the
//!   word list in both directions.
//! - [`Selection`] is the idle/selecting state machine behind one gesture.
//! - [`Game`] owns the grid and word list, and records which words have been
//!   found and in what order.
//! - [`PlaySession`] routes pointer events to a [`Game`] and reports changes to
//!   a [`GameObserver`], the seam for rendering front-ends.
//!
//! # Examples
//!
//! ```
//! use wordseek_core::WordList;
//! use wordseek_game::{Game, SelectionPath};
//! use wordseek_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let words: WordList = "OTTER|Swims\nBADGER|Digs".parse()?;
//! let generator = PuzzleGenerator::new(GeneratorConfig::default());
//! let puzzle = generator.generate_complete(words.entries(), PuzzleSeed::random(), 10)?;
//! let otter = puzzle.placement(0).unwrap();
//!
//! let mut game = Game::new(puzzle);
//! let outcome = game.submit_path(SelectionPath::from_positions(otter.positions()));
//! assert!(outcome.is_found());
//! assert_eq!(game.revealed_clues().collect::<Vec<_>>(), ["Swims"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    game::{Game, SelectionOutcome},
    matcher::{match_path, matching_entries},
    path::{ExtendOutcome, SelectionPath, is_legal_path},
    selection::Selection,
    session::{GameObserver, PlaySession},
};

mod game;
mod matcher;
mod path;
mod selection;
mod session;
