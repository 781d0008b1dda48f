//! Pointer gestures routed to a [`Game`] with change notifications.

use wordseek_core::{Position, WordEntry};

use crate::{ExtendOutcome, Game, SelectionOutcome, SelectionPath};

/// Receives notifications from a [`PlaySession`].
///
/// Every method has an empty default, so front-ends implement only what they
/// render.
pub trait GameObserver {
    /// The selection in progress changed; `None` means it was cleared.
    fn selection_changed(&mut self, path: Option<&SelectionPath>) {
        let _ = path;
    }

    /// A word was found for the first time along `path`.
    fn word_found(&mut self, entry: &WordEntry, path: &SelectionPath) {
        let _ = (entry, path);
    }

    /// A selection ended without finding a new word.
    fn selection_rejected(&mut self, outcome: SelectionOutcome) {
        let _ = outcome;
    }

    /// The last remaining word was found. Called at most once per game.
    fn puzzle_completed(&mut self, game: &Game) {
        let _ = game;
    }
}

impl GameObserver for () {}

/// A [`Game`] driven by pointer events, reporting changes to an observer.
///
/// # Examples
///
/// ```
/// use wordseek_core::{LetterGrid, Position, WordList};
/// use wordseek_game::{Game, GameObserver, PlaySession};
///
/// #[derive(Default)]
/// struct Completion(bool);
///
/// impl GameObserver for Completion {
///     fn puzzle_completed(&mut self, _game: &Game) {
///         self.0 = true;
///     }
/// }
///
/// let grid: LetterGrid = "OX\nXX".parse()?;
/// let words: WordList = "O".parse()?;
/// let mut session = PlaySession::new(Game::from_parts(grid, words.into_entries()), Completion::default());
///
/// session.pointer_down(Position::new(0, 0));
/// session.pointer_up();
/// assert!(session.observer().0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct PlaySession<O> {
    game: Game,
    observer: O,
}

impl<O> PlaySession<O>
where
    O: GameObserver,
{
    /// Wraps `game`, sending notifications to `observer`.
    #[must_use]
    pub fn new(game: Game, observer: O) -> Self {
        Self { game, observer }
    }

    /// Returns the game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Splits the session into its game and observer.
    pub fn into_parts(self) -> (Game, O) {
        (self.game, self.observer)
    }

    /// Starts a selection at `pos`.
    pub fn pointer_down(&mut self, pos: Position) {
        if self.game.begin_selection(pos) {
            self.observer.selection_changed(self.game.selection().path());
        }
    }

    /// Offers `pos` to the selection in progress.
    pub fn pointer_move(&mut self, pos: Position) -> ExtendOutcome {
        let outcome = self.game.extend_selection(pos);
        if outcome.is_extended() {
            self.observer.selection_changed(self.game.selection().path());
        }
        outcome
    }

    /// Ends the selection and notifies the observer of the result.
    pub fn pointer_up(&mut self) -> SelectionOutcome {
        let outcome = self.game.end_selection();
        if outcome.is_not_selecting() {
            return outcome;
        }
        self.observer.selection_changed(None);
        self.report(outcome);
        outcome
    }

    /// Abandons the selection in progress.
    pub fn cancel(&mut self) {
        if self.game.selection().is_selecting() {
            self.game.cancel_selection();
            self.observer.selection_changed(None);
        }
    }

    /// Checks a whole path at once, as if it had been traced by the pointer.
    pub fn submit(&mut self, path: SelectionPath) -> SelectionOutcome {
        self.cancel();
        let outcome = self.game.submit_path(path);
        self.report(outcome);
        outcome
    }

    fn report(&mut self, outcome: SelectionOutcome) {
        let SelectionOutcome::Found { index, completed } = outcome else {
            self.observer.selection_rejected(outcome);
            return;
        };
        if let Some(path) = self.game.found_path(index) {
            self.observer
                .word_found(&self.game.entries()[index], path);
        }
        if completed {
            self.observer.puzzle_completed(&self.game);
        }
    }
}

#[cfg(test)]
mod tests {
    use wordseek_core::{LetterGrid, WordList};

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl GameObserver for Recorder {
        fn selection_changed(&mut self, path: Option<&SelectionPath>) {
            self.events
                .push(format!("selection {}", path.map_or(0, SelectionPath::len)));
        }

        fn word_found(&mut self, entry: &WordEntry, _path: &SelectionPath) {
            self.events.push(format!("found {}", entry.word()));
        }

        fn selection_rejected(&mut self, outcome: SelectionOutcome) {
            self.events.push(format!("rejected {outcome:?}"));
        }

        fn puzzle_completed(&mut self, game: &Game) {
            self.events.push(format!("completed {}", game.found_count()));
        }
    }

    fn session(words: &str) -> PlaySession<Recorder> {
        let grid: LetterGrid = "CAT\nXOX\nXXW".parse().unwrap();
        let list: WordList = words.parse().unwrap();
        PlaySession::new(Game::from_parts(grid, list.into_entries()), Recorder::default())
    }

    #[test]
    fn test_gesture_notifications() {
        let mut session = session("CAT\nCOW");
        session.pointer_down(Position::new(0, 0));
        session.pointer_move(Position::new(0, 1));
        session.pointer_move(Position::new(1, 1));
        session.pointer_move(Position::new(0, 2));
        session.pointer_up();
        assert_eq!(
            session.observer().events,
            ["selection 1", "selection 2", "selection 3", "selection 0", "found CAT"]
        );
    }

    #[test]
    fn test_completion_notified_once() {
        let mut session = session("CAT\nCOW");
        let cat = SelectionPath::from_positions([(0, 0), (0, 1), (0, 2)].map(Position::from));
        let cow = SelectionPath::from_positions([(2, 2), (1, 1), (0, 0)].map(Position::from));
        session.submit(cat.clone());
        session.submit(cow);
        session.submit(cat);

        let (game, recorder) = session.into_parts();
        assert!(game.is_completed());
        assert_eq!(
            recorder.events,
            [
                "found CAT",
                "found COW",
                "completed 2",
                "rejected AlreadyFound { index: 0 }",
            ]
        );
    }

    #[test]
    fn test_submit_clears_gesture_in_progress() {
        let mut session = session("CAT");
        session.pointer_down(Position::new(2, 0));
        session.pointer_move(Position::new(2, 1));
        let cat = SelectionPath::from_positions([(0, 0), (0, 1), (0, 2)].map(Position::from));
        session.submit(cat);
        assert!(session.game().selection().is_idle());
        assert_eq!(
            session.observer().events,
            ["selection 1", "selection 2", "selection 0", "found CAT", "completed 1"]
        );
    }

    #[test]
    fn test_pointer_up_without_selection_is_silent() {
        let mut session = session("CAT");
        assert_eq!(session.pointer_up(), SelectionOutcome::NotSelecting);
        session.cancel();
        assert!(session.observer().events.is_empty());
    }

    #[test]
    fn test_rejected_selection_clears_highlight() {
        let mut session = session("CAT");
        session.pointer_down(Position::new(1, 0));
        session.pointer_move(Position::new(1, 1));
        assert_eq!(session.pointer_up(), SelectionOutcome::NoMatch);
        assert_eq!(
            session.observer().events,
            ["selection 1", "selection 2", "selection 0", "rejected NoMatch"]
        );
    }

    #[test]
    fn test_unit_observer() {
        let grid: LetterGrid = "AB\nCD".parse().unwrap();
        let mut session = PlaySession::new(Game::from_parts(grid, Vec::new()), ());
        session.pointer_down(Position::new(0, 0));
        assert_eq!(session.pointer_up(), SelectionOutcome::NoMatch);
    }
}
