use wordseek_core::{LetterGrid, Position, WordEntry};
use wordseek_generator::GeneratedPuzzle;

use crate::{ExtendOutcome, Selection, SelectionPath, matcher};

/// The result of ending a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// No selection was in progress.
    NotSelecting,
    /// The selected cells do not form a straight line.
    Illegal,
    /// The selected letters spell no listed word in either direction.
    NoMatch,
    /// A word was found for the first time.
    Found {
        /// Index of the credited entry in the word list.
        index: usize,
        /// `true` if this find completed the puzzle.
        completed: bool,
    },
    /// The selected letters spell a word that was already found.
    AlreadyFound {
        /// Index of the matching entry in the word list.
        index: usize,
    },
}

/// A word-search game session.
///
/// Owns the letter grid and word list, tracks the selection in progress, and
/// records which words have been found, in discovery order.
///
/// # Example
///
/// ```
/// use wordseek_core::{LetterGrid, Position, WordList};
/// use wordseek_game::{Game, SelectionOutcome};
///
/// let grid: LetterGrid = "CAT\nXOX\nXXW".parse()?;
/// let words: WordList = "CAT|Purrs\nCOW|Moos".parse()?;
/// let mut game = Game::from_parts(grid, words.into_entries());
///
/// game.begin_selection(Position::new(2, 2));
/// game.extend_selection(Position::new(1, 1));
/// game.extend_selection(Position::new(0, 0));
/// assert_eq!(
///     game.end_selection(),
///     SelectionOutcome::Found { index: 1, completed: false },
/// );
/// assert_eq!(game.revealed_clues().collect::<Vec<_>>(), ["Moos"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: LetterGrid,
    entries: Vec<WordEntry>,
    selection: Selection,
    found_paths: Vec<Option<SelectionPath>>,
    found_order: Vec<usize>,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Words the generator could not place stay in the list; they can still be
    /// found if the fill happens to spell them, otherwise the game cannot be
    /// completed.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            seed,
            entries,
            grid,
            placements,
        } = puzzle;
        let unplaced = placements.iter().filter(|p| p.is_none()).count();
        if unplaced > 0 {
            log::warn!("starting puzzle {seed} with {unplaced} unplaced word(s)");
        }
        Self::from_parts(grid, entries)
    }

    /// Creates a game from an existing grid and word list.
    #[must_use]
    pub fn from_parts(grid: LetterGrid, entries: Vec<WordEntry>) -> Self {
        let found_paths = vec![None; entries.len()];
        Self {
            grid,
            entries,
            selection: Selection::Idle,
            found_paths,
            found_order: Vec::new(),
        }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the word list in its original order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Returns the current selection state.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Starts a selection at `pos`, abandoning any selection in progress.
    ///
    /// Returns `false` and leaves the state unchanged if `pos` is outside the
    /// grid.
    pub fn begin_selection(&mut self, pos: Position) -> bool {
        if !self.grid.contains(pos) {
            return false;
        }
        self.selection.begin(pos);
        true
    }

    /// Offers `pos` to the selection in progress.
    ///
    /// See [`SelectionPath::try_extend`] for which cells are accepted.
    pub fn extend_selection(&mut self, pos: Position) -> ExtendOutcome {
        if self.selection.is_idle() {
            return ExtendOutcome::NotSelecting;
        }
        if !self.grid.contains(pos) {
            return ExtendOutcome::OutsideGrid;
        }
        self.selection.extend(pos)
    }

    /// Discards the selection in progress without checking it.
    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    /// Ends the selection in progress and checks it against the word list.
    ///
    /// The selection is cleared whatever the outcome.
    pub fn end_selection(&mut self) -> SelectionOutcome {
        match self.selection.finish() {
            Some(path) => self.submit_path(path),
            None => SelectionOutcome::NotSelecting,
        }
    }

    /// Checks a complete path against the word list.
    ///
    /// An illegal path is rejected before any letters are read. When several
    /// entries match (duplicate words, or a word and its reverse), the first
    /// entry not yet found is credited. If all of them are already found,
    /// [`SelectionOutcome::AlreadyFound`] names the first.
    pub fn submit_path(&mut self, path: SelectionPath) -> SelectionOutcome {
        if !path.is_legal() {
            return SelectionOutcome::Illegal;
        }
        let matches: Vec<usize> =
            matcher::matching_entries(path.positions(), &self.entries, &self.grid)
                .map(|(index, _)| index)
                .collect();
        let Some(&first) = matches.first() else {
            return SelectionOutcome::NoMatch;
        };
        let Some(index) = matches.into_iter().find(|&index| !self.is_found(index)) else {
            return SelectionOutcome::AlreadyFound { index: first };
        };

        log::debug!("found {} along {:?}", self.entries[index].word(), path.positions());
        self.found_paths[index] = Some(path);
        self.found_order.push(index);
        let completed = self.is_completed();
        if completed {
            log::info!("all {} words found", self.entries.len());
        }
        SelectionOutcome::Found { index, completed }
    }

    /// Returns `true` if the entry at `index` has been found.
    #[must_use]
    pub fn is_found(&self, index: usize) -> bool {
        self.found_paths
            .get(index)
            .is_some_and(Option::is_some)
    }

    /// Returns the path along which the entry at `index` was found.
    #[must_use]
    pub fn found_path(&self, index: usize) -> Option<&SelectionPath> {
        self.found_paths.get(index).and_then(Option::as_ref)
    }

    /// Returns the number of entries found so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found_order.len()
    }

    /// Returns the found entries in the order they were discovered.
    pub fn found_entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.found_order.iter().map(|&index| &self.entries[index])
    }

    /// Returns the entries not yet found, in list order.
    pub fn remaining_entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries
            .iter()
            .zip(&self.found_paths)
            .filter(|(_, path)| path.is_none())
            .map(|(entry, _)| entry)
    }

    /// Returns the clue of the entry at `index`, if it has one.
    #[must_use]
    pub fn clue(&self, index: usize) -> Option<&str> {
        self.entries.get(index).and_then(WordEntry::clue)
    }

    /// Returns the clues of found entries, in discovery order.
    ///
    /// Entries without a clue are skipped.
    pub fn revealed_clues(&self) -> impl Iterator<Item = &str> {
        self.found_entries().filter_map(WordEntry::clue)
    }

    /// Returns `true` if every entry has been found.
    ///
    /// A game with an empty word list is trivially complete.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.found_order.len() == self.entries.len()
    }
}
