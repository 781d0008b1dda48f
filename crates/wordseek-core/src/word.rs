//! Target words and clue entries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// Errors produced when validating a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word contained no letters.
    #[display("word is empty")]
    Empty,
    /// The word contained a character outside `A`..=`Z`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
        /// Character index of `ch` within the input.
        index: usize,
    },
}

/// A non-empty word made only of uppercase Latin letters.
///
/// Input is uppercased on construction, so `"cat"` and `"CAT"` produce equal
/// words.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Word, WordError};
///
/// let word = Word::new("Gopher")?;
/// assert_eq!(word.as_str(), "GOPHER");
/// assert_eq!(word.len(), 6);
///
/// assert_eq!(Word::new(""), Err(WordError::Empty));
/// assert!(Word::new("ice cream").is_err());
/// # Ok::<(), WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Validates and uppercases `text`.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] for empty input and
    /// [`WordError::InvalidChar`] for any character outside the basic Latin
    /// alphabet.
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        text.chars()
            .enumerate()
            .map(|(index, ch)| {
                Letter::from_char(ch)
                    .map(Letter::as_char)
                    .ok_or(WordError::InvalidChar { ch, index })
            })
            .collect::<Result<String, _>>()
            .map(Self)
    }

    /// Returns the uppercase text of the word.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the letters in reading order.
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = Letter> {
        // Every byte was validated as an ASCII letter on construction.
        self.0.bytes().filter_map(Letter::from_ascii)
    }

    /// Returns `true` if `text` spells this word forwards or backwards.
    ///
    /// The comparison is case-insensitive.
    #[must_use]
    pub fn matches_either_way(&self, text: &str) -> bool {
        let word = self.0.as_bytes();
        let text = text.as_bytes();
        word.len() == text.len()
            && (word.eq_ignore_ascii_case(text)
                || word
                    .iter()
                    .zip(text.iter().rev())
                    .all(|(a, b)| a.eq_ignore_ascii_case(b)))
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A target word paired with an optional clue.
///
/// # Examples
///
/// ```
/// use wordseek_core::{Word, WordEntry};
///
/// let entry = WordEntry::with_clue(Word::new("owl")?, "Hoots at night");
/// assert_eq!(entry.word().as_str(), "OWL");
/// assert_eq!(entry.clue(), Some("Hoots at night"));
///
/// let bare = WordEntry::new(Word::new("fox")?);
/// assert_eq!(bare.clue(), None);
/// # Ok::<(), wordseek_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: Word,
    clue: Option<String>,
}

impl WordEntry {
    /// Creates an entry without a clue.
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self { word, clue: None }
    }

    /// Creates an entry with a clue.
    #[must_use]
    pub fn with_clue(word: Word, clue: impl Into<String>) -> Self {
        Self {
            word,
            clue: Some(clue.into()),
        }
    }

    /// Returns the target word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the clue, if any.
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }
}

impl From<Word> for WordEntry {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}

impl Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.clue {
            Some(clue) => write!(f, "{}|{clue}", self.word),
            None => Display::fmt(&self.word, f),
        }
    }
}
