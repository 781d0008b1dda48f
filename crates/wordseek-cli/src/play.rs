//! Terminal play mode.
//!
//! Each input line is one selection, written as whitespace-separated
//! `row,col` cells in selection order, e.g. `0,0 0,1 0,2`.

use std::io::{BufRead, Write};

use wordseek_core::{Position, WordEntry};
use wordseek_game::{Game, GameObserver, PlaySession, SelectionOutcome, SelectionPath};

use crate::CliError;

/// Error produced when an input line is not a selection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSelectionError {
    /// The line holds no cells.
    #[display("no cells given")]
    Empty,
    /// A cell is not written as `row,col`.
    #[display("invalid cell {token:?}, expected row,col")]
    InvalidCell {
        /// The offending token.
        token: String,
    },
}

/// Parses a line such as `3,0 2,1 1,2` into a selection path.
///
/// The path is not checked for legality.
///
/// # Errors
///
/// Returns an error if the line is blank or a token is not a `row,col` pair of
/// non-negative integers.
pub fn parse_selection(line: &str) -> Result<SelectionPath, ParseSelectionError> {
    let cells = line
        .split_whitespace()
        .map(parse_cell)
        .collect::<Result<Vec<_>, _>>()?;
    if cells.is_empty() {
        return Err(ParseSelectionError::Empty);
    }
    Ok(SelectionPath::from_positions(cells))
}

fn parse_cell(token: &str) -> Result<Position, ParseSelectionError> {
    let invalid = || ParseSelectionError::InvalidCell {
        token: token.to_owned(),
    };
    let (row, col) = token.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}

/// Turns game notifications into lines of text.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    messages: Vec<String>,
}

impl TerminalObserver {
    /// Takes the messages produced since the last call.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl GameObserver for TerminalObserver {
    fn word_found(&mut self, entry: &WordEntry, _path: &SelectionPath) {
        match entry.clue() {
            Some(clue) => self
                .messages
                .push(format!("Found {}! ({clue})", entry.word())),
            None => self.messages.push(format!("Found {}!", entry.word())),
        }
    }

    fn selection_rejected(&mut self, outcome: SelectionOutcome) {
        let message = match outcome {
            SelectionOutcome::Illegal => "Selections must run in a straight line.",
            SelectionOutcome::NoMatch => "No word there.",
            SelectionOutcome::AlreadyFound { .. } => "Already found.",
            SelectionOutcome::NotSelecting | SelectionOutcome::Found { .. } => return,
        };
        self.messages.push(message.to_owned());
    }

    fn puzzle_completed(&mut self, game: &Game) {
        let words: Vec<_> = game
            .found_entries()
            .map(|entry| entry.word().as_str())
            .collect();
        self.messages.push(format!(
            "Congratulations! You found all {} words: {}",
            words.len(),
            words.join(", ")
        ));
    }
}

/// Plays `game` with selections read line by line from `input`.
///
/// Stops when the puzzle is completed, on a `quit` line, or at the end of
/// input. Returns the game in its final state.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn play<R, W>(game: Game, input: R, output: &mut W) -> Result<Game, CliError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    writeln!(
        output,
        "Select a word as `row,col row,col ...` (e.g. `0,0 0,1 0,2`), or type `quit`."
    )?;
    let mut session = PlaySession::new(game, TerminalObserver::default());
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        match parse_selection(line) {
            Ok(path) => {
                session.submit(path);
            }
            Err(err) => writeln!(output, "{err}")?,
        }
        for message in session.observer_mut().take_messages() {
            writeln!(output, "{message}")?;
        }
        if session.game().is_completed() {
            break;
        }
    }

    let (game, _) = session.into_parts();
    if !game.is_completed() {
        writeln!(
            output,
            "Found {} of {} words.",
            game.found_count(),
            game.entries().len()
        )?;
    }
    Ok(game)
}
