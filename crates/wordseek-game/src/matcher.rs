//! Matching selected cells against the word list.

use wordseek_core::{LetterGrid, Position, WordEntry};

/// Returns every entry whose word reads along `path`, forwards or backwards,
/// together with its index in `entries`.
///
/// Only the letters under the path matter, so a word also matches where the
/// fill happens to spell it by chance. Paths that leave the grid match nothing.
/// Legality of the path is not checked here; see
/// [`is_legal_path`](crate::is_legal_path).
pub fn matching_entries<'a>(
    path: &[Position],
    entries: &'a [WordEntry],
    grid: &LetterGrid,
) -> impl Iterator<Item = (usize, &'a WordEntry)> + use<'a> {
    let text = grid.read(path.iter().copied());
    entries.iter().enumerate().filter(move |(_, entry)| {
        text.as_deref()
            .is_some_and(|text| entry.word().matches_either_way(text))
    })
}

/// Returns the first entry whose word reads along `path` in either direction.
///
/// # Examples
///
/// ```
/// use wordseek_core::{LetterGrid, Position, WordList};
/// use wordseek_game::match_path;
///
/// let grid: LetterGrid = "CAT\nXOX\nXXW".parse()?;
/// let words: WordList = "CAT\nWOC".parse()?;
///
/// let forward = [(0, 0), (0, 1), (0, 2)].map(Position::from);
/// let backward = [(0, 2), (0, 1), (0, 0)].map(Position::from);
/// let diagonal = [(0, 0), (1, 1), (2, 2)].map(Position::from);
///
/// assert_eq!(match_path(&forward, words.entries(), &grid).map(|e| e.word().as_str()), Some("CAT"));
/// assert_eq!(match_path(&backward, words.entries(), &grid).map(|e| e.word().as_str()), Some("CAT"));
/// assert_eq!(match_path(&diagonal, words.entries(), &grid).map(|e| e.word().as_str()), Some("WOC"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn match_path<'a>(
    path: &[Position],
    entries: &'a [WordEntry],
    grid: &LetterGrid,
) -> Option<&'a WordEntry> {
    matching_entries(path, entries, grid)
        .next()
        .map(|(_, entry)| entry)
}
