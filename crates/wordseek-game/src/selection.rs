//! The pointer-driven selection state machine.

use wordseek_core::Position;

use crate::{ExtendOutcome, SelectionPath};

/// Selection state between a pointer-down and the matching pointer-up.
///
/// ```text
/// Idle --begin--> Selecting --extend--> Selecting --finish/cancel--> Idle
///                    ^                                   |
///                    +-------------- begin --------------+
/// ```
///
/// # Examples
///
/// ```
/// use wordseek_core::Position;
/// use wordseek_game::Selection;
///
/// let mut selection = Selection::default();
/// assert!(selection.is_idle());
///
/// selection.begin(Position::new(0, 0));
/// selection.extend(Position::new(0, 1));
/// let path = selection.finish().unwrap();
/// assert_eq!(path.len(), 2);
/// assert!(selection.is_idle());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// No selection is in progress.
    #[default]
    Idle,
    /// A selection is in progress along the given path.
    Selecting(SelectionPath),
}

impl Selection {
    /// Starts a new selection at `pos`, abandoning any selection in progress.
    pub fn begin(&mut self, pos: Position) {
        *self = Self::Selecting(SelectionPath::new(pos));
    }

    /// Offers `pos` to the selection in progress.
    ///
    /// Returns [`ExtendOutcome::NotSelecting`] when idle.
    pub fn extend(&mut self, pos: Position) -> ExtendOutcome {
        match self {
            Self::Idle => ExtendOutcome::NotSelecting,
            Self::Selecting(path) => path.try_extend(pos),
        }
    }

    /// Ends the selection, returning its path.
    ///
    /// Returns `None` if no selection was in progress.
    pub fn finish(&mut self) -> Option<SelectionPath> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Selecting(path) => Some(path),
        }
    }

    /// Discards the selection in progress, if any.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns the path selected so far.
    #[must_use]
    pub fn path(&self) -> Option<&SelectionPath> {
        match self {
            Self::Idle => None,
            Self::Selecting(path) => Some(path),
        }
    }
}
