//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wordseek_core::{DEFAULT_WORD_COUNT, DirectionSet};
use wordseek_generator::{DEFAULT_GRID_SIZE, GeneratorConfig, GridSize, PuzzleSeed};

use crate::version::build_version;

/// Which directions words may run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionsKind {
    /// Right, down, and the two downward diagonals.
    Forward,
    /// All eight directions, including reversed words.
    All,
}

impl DirectionsKind {
    /// Returns the matching direction set.
    #[must_use]
    pub fn direction_set(self) -> DirectionSet {
        match self {
            Self::Forward => DirectionSet::FORWARD,
            Self::All => DirectionSet::all(),
        }
    }
}

/// Generate a word-search puzzle and optionally play it in the terminal.
#[derive(Debug, Parser)]
#[command(author, version = build_version(), about)]
pub struct Args {
    /// Word file with one `WORD` or `WORD|CLUE` per line [default: built-in list].
    #[arg(long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Maximum number of words to use from the list.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORD_COUNT)]
    pub count: usize,

    /// Grid side length.
    #[arg(long, value_name = "N", conflicts_with = "size_from_words")]
    pub size: Option<usize>,

    /// Use the number of words as the grid side length.
    #[arg(long)]
    pub size_from_words: bool,

    /// Directions words may run in.
    #[arg(long, value_name = "KIND", value_enum, default_value_t = DirectionsKind::All)]
    pub directions: DirectionsKind,

    /// Random placement attempts per word.
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Seed to reproduce a puzzle (64 hex digits) [default: random].
    #[arg(long, value_name = "HEX")]
    pub seed: Option<PuzzleSeed>,

    /// Regenerate with derived seeds, up to ROUNDS times, until every word is placed.
    #[arg(long, value_name = "ROUNDS")]
    pub complete: Option<usize>,

    /// Print where each word was placed.
    #[arg(long)]
    pub show_answers: bool,

    /// Play the puzzle, reading selections from standard input.
    #[arg(long)]
    pub play: bool,
}

impl Args {
    /// Builds the generator configuration these arguments describe.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        let size = if self.size_from_words {
            GridSize::WordCount
        } else {
            GridSize::Fixed(self.size.unwrap_or(DEFAULT_GRID_SIZE))
        };
        let config = GeneratorConfig::default()
            .size(size)
            .directions(self.directions.direction_set());
        match self.max_attempts {
            Some(attempts) => config.max_attempts(attempts),
            None => config,
        }
    }
}
