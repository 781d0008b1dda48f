//! The `wordseek` command: generate a word-search puzzle, print it, and
//! optionally play it in the terminal.
//!
//! ```sh
//! wordseek --words animals.txt --count 10 --size 14 --show-answers
//! wordseek --seed <HEX> --directions forward --play
//! ```

use std::io::{self, Write as _};

use wordseek_game::Game;
use wordseek_generator::{PuzzleGenerator, PuzzleSeed};

pub use self::{
    args::{Args, DirectionsKind},
    error::CliError,
};

pub mod args;
mod error;
pub mod play;
pub mod render;
pub mod version;
pub mod words;

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded, generation fails, or
/// terminal I/O fails.
pub fn run(args: &Args) -> Result<(), CliError> {
    let words = words::load_words(args.words.as_deref(), args.count)?;
    let generator = PuzzleGenerator::new(args.generator_config());
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let puzzle = match args.complete {
        Some(rounds) => generator.generate_complete(words.entries(), seed, rounds)?,
        None => generator.generate_with_seed(words.entries(), seed)?,
    };

    let mut stdout = io::stdout().lock();
    render::write_puzzle(&mut stdout, &puzzle, args.show_answers)?;

    if !puzzle.is_complete() {
        let unplaced: Vec<_> = puzzle
            .unplaced()
            .map(|entry| entry.word().as_str())
            .collect();
        eprintln!(
            "warning: could not place {}; try --complete or a larger --size",
            unplaced.join(", ")
        );
    }

    if args.play {
        writeln!(stdout)?;
        play::play(Game::new(puzzle), io::stdin().lock(), &mut stdout)?;
    }
    Ok(())
}
