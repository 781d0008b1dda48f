use std::{io, path::PathBuf};

use wordseek_core::ParseWordListError;
use wordseek_generator::GenerateError;

/// Errors that stop the `wordseek` command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The word file could not be read.
    #[display("cannot read {}: {source}", path.display())]
    ReadWords {
        /// Path given with `--words`.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The word file holds an invalid word.
    #[display("invalid word list: {_0}")]
    #[from]
    WordList(ParseWordListError),
    /// The word list has no entries after truncation.
    #[display("the word list is empty")]
    NoWords,
    /// Generation failed.
    #[display("cannot generate puzzle: {_0}")]
    #[from]
    Generate(GenerateError),
    /// Writing output or reading gestures failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(io::Error),
}
