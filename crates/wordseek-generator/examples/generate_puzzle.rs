//! Example demonstrating word-search grid generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator`
//! - Generate a puzzle from a random or given seed
//! - Display the grid, placements, and seed
//! - Sample many seeds and keep the puzzle with the most crossing words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample seeds in parallel and keep the complete puzzle with the most crossings
//! (default budget: 10000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --best-of 10000
//! ```
//!
//! Select the direction set (forward or all) and grid size:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --directions forward --size 10
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use wordseek_core::{DirectionSet, WordEntry, WordList};
use wordseek_generator::{GeneratedPuzzle, GeneratorConfig, GridSize, PuzzleGenerator, PuzzleSeed};

const WORDS: [&str; 8] = [
    "CRANE", "HERON", "PLOVER", "SWIFT", "ROBIN", "WREN", "EGRET", "STARLING",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionsKind {
    Forward,
    All,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directions words may be placed along.
    #[arg(long, value_name = "KIND", default_value = "all")]
    directions: DirectionsKind,

    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = 12)]
    size: usize,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "best_of")]
    seed: Option<PuzzleSeed>,

    /// Number of random seeds to sample, keeping the best puzzle.
    #[arg(long, value_name = "COUNT")]
    best_of: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let directions = match args.directions {
        DirectionsKind::Forward => DirectionSet::FORWARD,
        DirectionsKind::All => DirectionSet::all(),
    };
    let generator = PuzzleGenerator::new(
        GeneratorConfig::default()
            .size(GridSize::Fixed(args.size))
            .directions(directions),
    );
    let words = WordList::from_words(WORDS)
        .expect("sample words are valid")
        .into_entries();

    let Some(max_tries) = args.best_of else {
        let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
        match generator.generate_with_seed(&words, seed) {
            Ok(puzzle) => print_puzzle(&puzzle, None),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    };

    if max_tries == 0 {
        eprintln!("--best-of must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .filter_map(|_| generate_complete(&generator, &words))
        .max_by_key(GeneratedPuzzle::crossing_count);

    if let Some(puzzle) = best {
        print_puzzle(&puzzle, Some(max_tries));
        return;
    }

    eprintln!("No sampled puzzle placed every word.");
    process::exit(1);
}

fn generate_complete(generator: &PuzzleGenerator, words: &[WordEntry]) -> Option<GeneratedPuzzle> {
    generator
        .generate(words)
        .ok()
        .filter(GeneratedPuzzle::is_complete)
}

fn print_puzzle(puzzle: &GeneratedPuzzle, max_tries: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(max_tries) = max_tries {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Crossings: {}", puzzle.crossing_count());
        println!();
    }

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for (entry, placement) in puzzle.entries.iter().zip(&puzzle.placements) {
        match placement {
            Some(placement) => println!("  {}: {placement}", entry.word()),
            None => println!("  {}: (not placed)", entry.word()),
        }
    }
}
