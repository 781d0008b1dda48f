//! Generator configuration.

use wordseek_core::DirectionSet;

/// Side length used by the preset configurations.
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Largest grid side length a generator accepts.
pub const MAX_GRID_SIZE: usize = 1024;

/// Placement attempts per word in [`GeneratorConfig::classic`].
pub const CLASSIC_MAX_ATTEMPTS: usize = 100;

/// Placement attempts per word in [`GeneratorConfig::default`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// How the side length of the grid is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    /// A fixed side length.
    Fixed(usize),
    /// One row and column per word in the list.
    WordCount,
}

impl GridSize {
    /// Resolves the side length for a list of `word_count` words.
    #[must_use]
    pub fn resolve(self, word_count: usize) -> usize {
        match self {
            Self::Fixed(size) => size,
            Self::WordCount => word_count,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::Fixed(DEFAULT_GRID_SIZE)
    }
}

/// Parameters of a generation run.
///
/// Built with [`Default`] or [`GeneratorConfig::classic`] and adjusted with
/// the builder-style setters.
///
/// # Examples
///
/// ```
/// use wordseek_core::DirectionSet;
/// use wordseek_generator::{GeneratorConfig, GridSize};
///
/// let config = GeneratorConfig::default()
///     .size(GridSize::Fixed(10))
///     .directions(DirectionSet::FORWARD)
///     .max_attempts(50);
///
/// assert_eq!(config.grid_size(), GridSize::Fixed(10));
/// assert_eq!(config.max_attempts_per_word(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    size: GridSize,
    directions: DirectionSet,
    max_attempts: usize,
}

impl Default for GeneratorConfig {
    /// 12×12 grid, all eight directions, 200 attempts per word.
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            directions: DirectionSet::all(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// 12×12 grid, forward directions only, 100 attempts per word.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            size: GridSize::default(),
            directions: DirectionSet::FORWARD,
            max_attempts: CLASSIC_MAX_ATTEMPTS,
        }
    }

    /// Sets the grid sizing policy.
    #[must_use]
    pub fn size(mut self, size: GridSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the directions words may be placed along.
    #[must_use]
    pub fn directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the number of random placement attempts per word.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the grid sizing policy.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.size
    }

    /// Returns the allowed placement directions.
    #[must_use]
    pub fn direction_set(&self) -> DirectionSet {
        self.directions
    }

    /// Returns the number of placement attempts per word.
    #[must_use]
    pub fn max_attempts_per_word(&self) -> usize {
        self.max_attempts
    }
}
