use rand::{
    Rng,
    distr::{Distribution as _, Uniform, uniform},
};
use wordseek_core::{Direction, Letter, LetterGrid, Position, Word, WordEntry};

use crate::{GeneratorConfig, MAX_GRID_SIZE, Placement, PuzzleSeed, draft::DraftGrid};

/// Errors that prevent a generation run from producing a puzzle.
///
/// Words that merely fail to fit are not errors for the basic generation
/// methods; they are reported through [`GeneratedPuzzle::unplaced`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// The configured grid size resolved to zero.
    #[display("grid size must be at least 1")]
    EmptyGrid,
    /// The configured grid size exceeds [`MAX_GRID_SIZE`].
    #[display("grid size {size} exceeds the maximum of {MAX_GRID_SIZE}")]
    GridTooLarge {
        /// The resolved grid size.
        size: usize,
    },
    /// The configured direction set was empty.
    #[display("no placement directions are enabled")]
    NoDirections,
    /// A word is longer than the grid side and can never be placed.
    #[display("word {word} is longer than the {size}x{size} grid")]
    WordTooLong {
        /// The offending word.
        word: Word,
        /// The resolved grid size.
        size: usize,
    },
    /// Regeneration ran out of rounds with words still unplaced.
    #[display("{} word(s) left unplaced after {rounds} round(s)", unplaced.len())]
    Incomplete {
        /// Number of generation rounds attempted.
        rounds: usize,
        /// Words left unplaced in the final round.
        unplaced: Vec<Word>,
    },
    /// A random sampler could not be built.
    #[display("failed to build sampler: {_0}")]
    Sampler(#[from] uniform::Error),
}

/// A generated grid together with where each word ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The completed grid.
    pub grid: LetterGrid,
    /// One slot per input entry: the placement, or `None` if it did not fit.
    pub placements: Vec<Option<Placement>>,
}

/// A generated puzzle: seed, word entries, grid, and placement report.
///
/// `entries[i]` was placed at `placements[i]` when that slot is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed that reproduces this puzzle with the same configuration.
    pub seed: PuzzleSeed,
    /// The requested entries, in input order.
    pub entries: Vec<WordEntry>,
    /// The completed grid.
    pub grid: LetterGrid,
    /// One slot per entry: the placement, or `None` if it did not fit.
    pub placements: Vec<Option<Placement>>,
}

impl GeneratedPuzzle {
    /// Returns the placement of entry `index`, if it was placed.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.placements.get(index).copied().flatten()
    }

    /// Iterates over placed entries with their placements.
    pub fn placed(&self) -> impl Iterator<Item = (&WordEntry, Placement)> {
        self.entries
            .iter()
            .zip(&self.placements)
            .filter_map(|(entry, placement)| placement.map(|placement| (entry, placement)))
    }

    /// Iterates over entries that could not be placed.
    pub fn unplaced(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries
            .iter()
            .zip(&self.placements)
            .filter(|(_, placement)| placement.is_none())
            .map(|(entry, _)| entry)
    }

    /// Returns `true` if every entry was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placements.iter().all(Option::is_some)
    }

    /// Counts the cells covered by more than one placed word.
    #[must_use]
    pub fn crossing_count(&self) -> usize {
        let size = self.grid.size();
        let mut coverage = vec![0_u8; size * size];
        for (_, placement) in self.placed() {
            for pos in placement.positions() {
                let cell = &mut coverage[pos.row() * size + pos.col()];
                *cell = cell.saturating_add(1);
            }
        }
        coverage.into_iter().filter(|&count| count > 1).count()
    }
}

/// Places word lists onto square letter grids.
///
/// Each word is tried, in input order, up to the configured number of times:
/// a direction is drawn from the configured set and a start cell is drawn from
/// the whole grid. The first attempt whose cells are all in bounds and either
/// empty or already holding the needed letter wins, so words may cross where
/// they share letters. Words that exhaust their attempts are skipped with a
/// warning. Remaining cells are filled with uniformly random letters.
///
/// # Examples
///
/// ```
/// use wordseek_core::WordList;
/// use wordseek_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
///
/// let words = WordList::from_words(["otter", "heron", "mole"])?;
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
///
/// let seed = PuzzleSeed::from_phrase("riverbank");
/// let puzzle = generator.generate_with_seed(words.entries(), seed)?;
///
/// assert_eq!(puzzle.grid.size(), 12);
/// for (entry, placement) in puzzle.placed() {
///     assert_eq!(placement.read(&puzzle.grid).as_deref(), Some(entry.word().as_str()));
/// }
///
/// // The same seed reproduces the same puzzle.
/// assert_eq!(generator.generate_with_seed(words.entries(), seed)?, puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_rng`].
    pub fn generate(&self, entries: &[WordEntry]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(entries, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_rng`].
    pub fn generate_with_seed(
        &self,
        entries: &[WordEntry],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let GeneratedGrid { grid, placements } = self.generate_with_rng(entries, &mut seed.rng())?;
        let puzzle = GeneratedPuzzle {
            seed,
            entries: entries.to_vec(),
            grid,
            placements,
        };
        log::info!(
            "generated {size}x{size} grid from seed {seed}: {placed}/{total} words placed",
            size = puzzle.grid.size(),
            placed = puzzle.placed().count(),
            total = puzzle.entries.len(),
        );
        Ok(puzzle)
    }

    /// Generates a grid, drawing every random choice from `rng`.
    ///
    /// Entries are placed in input order; a word that cannot be placed within
    /// the attempt budget is logged and left out of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyGrid`] if the grid size resolves to zero
    /// and [`GenerateError::NoDirections`] if the direction set is empty.
    pub fn generate_with_rng<R>(
        &self,
        entries: &[WordEntry],
        rng: &mut R,
    ) -> Result<GeneratedGrid, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let size = self.resolve_size(entries)?;
        let directions: Vec<Direction> = self.config.direction_set().directions().collect();
        if directions.is_empty() {
            return Err(GenerateError::NoDirections);
        }

        let coordinate = Uniform::new(0, size)?;
        let direction_index = Uniform::new(0, directions.len())?;
        let letter_index = Uniform::new(0, Letter::COUNT)?;
        let max_attempts = self.config.max_attempts_per_word();

        let mut draft = DraftGrid::new(size);
        let mut placements = Vec::with_capacity(entries.len());
        for entry in entries {
            let word = entry.word();
            let mut placed = None;
            for attempt in 1..=max_attempts {
                let direction = directions[direction_index.sample(rng)];
                let start = Position::new(coordinate.sample(rng), coordinate.sample(rng));
                let placement = Placement::new(start, direction, word.len());
                if draft.fits(word, &placement) {
                    let shared = draft.write(word, &placement);
                    log::debug!(
                        "placed {word} at {placement} after {attempt} attempt(s), {shared} shared cell(s)"
                    );
                    placed = Some(placement);
                    break;
                }
            }
            if placed.is_none() {
                log::warn!(
                    "could not place {word} in a {size}x{size} grid after {max_attempts} attempts"
                );
            }
            placements.push(placed);
        }

        log::debug!("filling {} empty cell(s)", draft.empty_count());
        let grid = draft.fill_with(|| Letter::from_index(letter_index.sample(rng)));
        Ok(GeneratedGrid { grid, placements })
    }

    /// Generates puzzles until every entry is placed.
    ///
    /// Starts from `seed` and, after each incomplete round, continues with
    /// [`PuzzleSeed::derive_next`], for at most `max_rounds` rounds (at least
    /// one round always runs). The returned puzzle's seed reproduces it
    /// directly through [`PuzzleGenerator::generate_with_seed`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::WordTooLong`] without generating anything if a
    /// word can never fit, [`GenerateError::Incomplete`] if every round left
    /// words unplaced, and the errors of
    /// [`PuzzleGenerator::generate_with_rng`].
    pub fn generate_complete(
        &self,
        entries: &[WordEntry],
        seed: PuzzleSeed,
        max_rounds: usize,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let size = self.resolve_size(entries)?;
        if let Some(entry) = entries.iter().find(|entry| entry.word().len() > size) {
            return Err(GenerateError::WordTooLong {
                word: entry.word().clone(),
                size,
            });
        }

        let rounds = max_rounds.max(1);
        let mut seed = seed;
        let mut unplaced = Vec::new();
        for round in 1..=rounds {
            let puzzle = self.generate_with_seed(entries, seed)?;
            if puzzle.is_complete() {
                log::info!("all words placed in round {round}");
                return Ok(puzzle);
            }
            unplaced = puzzle.unplaced().map(|entry| entry.word().clone()).collect();
            log::debug!(
                "round {round} left {} word(s) unplaced, regenerating",
                unplaced.len()
            );
            seed = seed.derive_next();
        }
        Err(GenerateError::Incomplete { rounds, unplaced })
    }

    fn resolve_size(&self, entries: &[WordEntry]) -> Result<usize, GenerateError> {
        match self.config.grid_size().resolve(entries.len()) {
            0 => Err(GenerateError::EmptyGrid),
            size if size > MAX_GRID_SIZE => Err(GenerateError::GridTooLarge { size }),
            size => Ok(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use wordseek_core::{DirectionSet, WordList};

    use super::*;
    use crate::GridSize;

    const SEED: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    fn seed() -> PuzzleSeed {
        SEED.parse().unwrap()
    }

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        WordList::from_words(words).unwrap().into_entries()
    }

    fn assert_placements_readable(puzzle: &GeneratedPuzzle) {
        for (entry, placement) in puzzle.placed() {
            assert_eq!(
                placement.read(&puzzle.grid).as_deref(),
                Some(entry.word().as_str()),
                "{} at {placement}",
                entry.word()
            );
        }
    }

    fn assert_no_conflicting_overlap(puzzle: &GeneratedPuzzle) {
        let mut expected = HashMap::new();
        for (entry, placement) in puzzle.placed() {
            for (pos, letter) in placement.positions().zip(entry.word().letters()) {
                let previous = expected.insert(pos, letter);
                assert!(
                    previous.is_none_or(|previous| previous == letter),
                    "conflicting letters at {pos}"
                );
            }
        }
    }

    #[test]
    fn test_cat_dog_on_eight_by_eight() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(8)));
        let puzzle = generator
            .generate_with_seed(&entries(&["CAT", "DOG"]), seed())
            .unwrap();

        assert!(puzzle.is_complete());
        assert_eq!(puzzle.grid.size(), 8);
        let cat = puzzle.placement(0).unwrap();
        assert_eq!(cat.read(&puzzle.grid).as_deref(), Some("CAT"));
        let dog = puzzle.placement(1).unwrap();
        assert_eq!(dog.read(&puzzle.grid).as_deref(), Some("DOG"));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let generator = PuzzleGenerator::default();
        let words = entries(&["OTTER", "HERON", "BEAVER", "MINK"]);
        let a = generator.generate_with_seed(&words, seed()).unwrap();
        let b = generator.generate_with_seed(&words, seed()).unwrap();
        assert_eq!(a, b);

        let c = generator
            .generate_with_seed(&words, seed().derive_next())
            .unwrap();
        assert_ne!(a.grid, c.grid);
    }

    #[test]
    fn test_lowercase_input_is_written_uppercase() {
        let generator = PuzzleGenerator::new(GeneratorConfig::classic());
        let puzzle = generator
            .generate_with_seed(&entries(&["lynx"]), seed())
            .unwrap();
        let placement = puzzle.placement(0).unwrap();
        assert_eq!(placement.read(&puzzle.grid).as_deref(), Some("LYNX"));
    }

    #[test]
    fn test_classic_uses_forward_directions_only() {
        let generator = PuzzleGenerator::new(GeneratorConfig::classic());
        let words = entries(&["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT"]);
        for round in 0..8 {
            let mut seed = seed();
            for _ in 0..round {
                seed = seed.derive_next();
            }
            let puzzle = generator.generate_with_seed(&words, seed).unwrap();
            for (_, placement) in puzzle.placed() {
                assert!(DirectionSet::FORWARD.allows(placement.direction()));
            }
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_left_unplaced() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(4)));
        let words = entries(&["ELEPHANT", "BEE"]);
        let puzzle = generator.generate_with_seed(&words, seed()).unwrap();

        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.placement(0), None);
        let unplaced: Vec<_> = puzzle.unplaced().map(|e| e.word().as_str()).collect();
        assert_eq!(unplaced, ["ELEPHANT"]);
        // Later words are still processed.
        assert!(puzzle.placement(1).is_some());
        assert_placements_readable(&puzzle);
    }

    #[test]
    fn test_zero_attempts_places_nothing() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().max_attempts(0));
        let puzzle = generator
            .generate_with_seed(&entries(&["CAT"]), seed())
            .unwrap();
        assert_eq!(puzzle.unplaced().count(), 1);
        assert_eq!(puzzle.grid.positions().count(), 144);
    }

    #[test]
    fn test_word_count_sizing() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::WordCount));
        let words = entries(&["ONE", "TWO", "SIX", "TEN", "ANT"]);
        let puzzle = generator.generate_with_seed(&words, seed()).unwrap();
        assert_eq!(puzzle.grid.size(), 5);

        assert!(matches!(
            generator.generate_with_seed(&[], seed()),
            Err(GenerateError::EmptyGrid)
        ));
    }

    #[test]
    fn test_configuration_errors() {
        let no_directions =
            PuzzleGenerator::new(GeneratorConfig::default().directions(DirectionSet::empty()));
        assert!(matches!(
            no_directions.generate_with_seed(&entries(&["CAT"]), seed()),
            Err(GenerateError::NoDirections)
        ));

        let empty = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(0)));
        assert!(matches!(
            empty.generate_with_seed(&entries(&["CAT"]), seed()),
            Err(GenerateError::EmptyGrid)
        ));

        let largest =
            PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(MAX_GRID_SIZE)));
        assert!(largest.resolve_size(&entries(&["CAT"])).is_ok());

        for size in [MAX_GRID_SIZE + 1, 1 << 33, usize::MAX] {
            let huge = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(size)));
            assert!(matches!(
                huge.generate_with_seed(&entries(&["CAT"]), seed()),
                Err(GenerateError::GridTooLarge { size: reported }) if reported == size
            ));
            assert!(matches!(
                huge.generate_complete(&entries(&["CAT"]), seed(), 3),
                Err(GenerateError::GridTooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_adversarial_order_crowds_out_later_words() {
        // On a 3x3 grid with only horizontal placement, three 3-letter words
        // with no shared letters fill every row; a fourth can never fit.
        let generator = PuzzleGenerator::new(
            GeneratorConfig::default()
                .size(GridSize::Fixed(3))
                .directions(DirectionSet::RIGHT)
                .max_attempts(500),
        );
        let words = entries(&["ABC", "DEF", "GHI", "JKL"]);
        let puzzle = generator.generate_with_seed(&words, seed()).unwrap();
        assert!(puzzle.placement(0).is_some());
        assert!(puzzle.placement(1).is_some());
        assert!(puzzle.placement(2).is_some());
        assert_eq!(puzzle.placement(3), None);

        // Put the blocked word first and it wins a row instead.
        let reordered = entries(&["JKL", "ABC", "DEF", "GHI"]);
        let puzzle = generator.generate_with_seed(&reordered, seed()).unwrap();
        assert!(puzzle.placement(0).is_some());
        assert_eq!(puzzle.unplaced().count(), 1);
        assert_placements_readable(&puzzle);
    }

    #[test]
    fn test_crossing_words_share_letters() {
        // Right and down only on a 3x3 grid: the two words either use
        // separate lines or cross on their shared leading A.
        let generator = PuzzleGenerator::new(
            GeneratorConfig::default()
                .size(GridSize::Fixed(3))
                .directions(DirectionSet::RIGHT | DirectionSet::DOWN)
                .max_attempts(1_000),
        );
        let words = entries(&["ABC", "AXY"]);
        for round in 0..10 {
            let mut seed = seed();
            for _ in 0..round {
                seed = seed.derive_next();
            }
            let puzzle = generator.generate_with_seed(&words, seed).unwrap();
            assert_placements_readable(&puzzle);
            assert_no_conflicting_overlap(&puzzle);
        }
    }

    #[test]
    fn test_generate_complete_rejects_impossible_words() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(4)));
        let result = generator.generate_complete(&entries(&["CAT", "GIRAFFE"]), seed(), 10);
        assert!(matches!(
            result,
            Err(GenerateError::WordTooLong { ref word, size: 4 }) if word.as_str() == "GIRAFFE"
        ));
    }

    #[test]
    fn test_generate_complete_reports_exhaustion() {
        let generator = PuzzleGenerator::new(
            GeneratorConfig::default()
                .size(GridSize::Fixed(3))
                .directions(DirectionSet::RIGHT)
                .max_attempts(500),
        );
        let words = entries(&["ABC", "DEF", "GHI", "JKL"]);
        let result = generator.generate_complete(&words, seed(), 3);
        let Err(GenerateError::Incomplete { rounds, unplaced }) = &result else {
            panic!("expected incomplete generation, got {result:?}");
        };
        assert_eq!(*rounds, 3);
        assert_eq!(unplaced.len(), 1);
    }

    #[test]
    fn test_generate_complete_result_is_reproducible() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default().size(GridSize::Fixed(9)));
        let words = entries(&["PELICAN", "PENGUIN", "PARROT", "PUFFIN", "PHEASANT"]);
        let puzzle = generator.generate_complete(&words, seed(), 50).unwrap();
        assert!(puzzle.is_complete());
        assert_placements_readable(&puzzle);

        let again = generator.generate_with_seed(&words, puzzle.seed).unwrap();
        assert_eq!(again, puzzle);
    }

    #[test]
    fn test_crossing_count() {
        let grid: LetterGrid = "CAT\nXNX\nXTX".parse().unwrap();
        let puzzle = GeneratedPuzzle {
            seed: seed(),
            entries: entries(&["CAT", "ANT"]),
            grid,
            placements: vec![
                Some(Placement::new(Position::new(0, 0), Direction::Right, 3)),
                Some(Placement::new(Position::new(0, 1), Direction::Down, 3)),
            ],
        };
        assert_eq!(puzzle.crossing_count(), 1);
        assert_placements_readable(&puzzle);
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        "[A-Z]{1,8}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_generated_grids_are_consistent(
            words in prop::collection::vec(word_strategy(), 0..10),
            size in 1usize..14,
            bytes in any::<[u8; 32]>(),
            all_directions in any::<bool>(),
        ) {
            let directions = if all_directions { DirectionSet::all() } else { DirectionSet::FORWARD };
            let generator = PuzzleGenerator::new(
                GeneratorConfig::default()
                    .size(GridSize::Fixed(size))
                    .directions(directions),
            );
            let words = entries(&words.iter().map(String::as_str).collect::<Vec<_>>());
            let puzzle = generator
                .generate_with_seed(&words, PuzzleSeed::from_bytes(bytes))
                .unwrap();

            // Full coverage: every cell holds an uppercase letter.
            prop_assert_eq!(puzzle.grid.size(), size);
            prop_assert!(puzzle
                .grid
                .positions()
                .all(|pos| puzzle.grid[pos].as_char().is_ascii_uppercase()));

            // Placement correctness and no conflicting overlap.
            prop_assert_eq!(puzzle.placements.len(), words.len());
            assert_placements_readable(&puzzle);
            assert_no_conflicting_overlap(&puzzle);
            for (entry, placement) in puzzle.placed() {
                prop_assert!(directions.allows(placement.direction()));
                prop_assert_eq!(placement.len(), entry.word().len());
            }

            // Words longer than the grid are never placed.
            for (entry, placement) in words.iter().zip(&puzzle.placements) {
                if entry.word().len() > size {
                    prop_assert!(placement.is_none());
                }
            }
        }
    }
}
