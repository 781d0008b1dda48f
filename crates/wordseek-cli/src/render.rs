//! Plain-text rendering of a generated puzzle.

use std::io::{self, Write};

use wordseek_core::LetterGrid;
use wordseek_generator::GeneratedPuzzle;

/// Writes the seed, the grid with row and column numbers, and the word list.
///
/// With `show_answers`, also writes where each word was placed.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_puzzle<W>(out: &mut W, puzzle: &GeneratedPuzzle, show_answers: bool) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Seed: {}", puzzle.seed)?;
    writeln!(out)?;
    write_grid(out, &puzzle.grid)?;
    writeln!(out)?;

    writeln!(out, "Words:")?;
    for entry in &puzzle.entries {
        match entry.clue() {
            Some(clue) => writeln!(out, "  {} - {clue}", entry.word())?,
            None => writeln!(out, "  {}", entry.word())?,
        }
    }

    if show_answers {
        writeln!(out)?;
        writeln!(out, "Answers:")?;
        for (entry, placement) in puzzle.entries.iter().zip(&puzzle.placements) {
            match placement {
                Some(placement) => writeln!(out, "  {}: {placement}", entry.word())?,
                None => writeln!(out, "  {}: (not placed)", entry.word())?,
            }
        }
    }
    Ok(())
}

/// Writes `grid` with zero-based column numbers on top and row numbers on the
/// left.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_grid<W>(out: &mut W, grid: &LetterGrid) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(out, "   ")?;
    for col in 0..grid.size() {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;
    for (row, letters) in grid.rows().enumerate() {
        write!(out, "{row:>3}")?;
        for letter in letters {
            write!(out, "{letter:>3}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
