//! Ordered word lists and their text format.
//!
//! A word list is read from plain text with one entry per line, either as
//! `WORD` or as `WORD|CLUE`. Lines are trimmed and blank lines are skipped. The
//! clue is everything after the first `|`, trimmed; an empty clue is treated as
//! no clue.
//!
//! ```text
//! OTTER|Playful river swimmer
//! HERON|Wading bird with a long neck
//! MOLE
//! ```

use std::{slice, str::FromStr, vec};

use crate::{Word, WordEntry, WordError};

/// Number of words a puzzle asks for by default.
pub const DEFAULT_WORD_COUNT: usize = 8;

/// Error produced when a line of a word list holds an invalid word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {source}")]
pub struct ParseWordListError {
    /// One-based line number in the input.
    pub line: usize,
    /// Why the word was rejected.
    pub source: WordError,
}

/// An ordered list of target word entries.
///
/// # Examples
///
/// ```
/// use wordseek_core::WordList;
///
/// let mut list: WordList = "
///     otter | Playful river swimmer
///     heron|
///     mole
/// "
/// .parse()?;
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[0].word().as_str(), "OTTER");
/// assert_eq!(list[0].clue(), Some("Playful river swimmer"));
/// assert_eq!(list[1].clue(), None);
///
/// list.truncate(2);
/// assert_eq!(list.len(), 2);
/// # Ok::<(), wordseek_core::ParseWordListError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a clue-less list from plain words.
    ///
    /// # Errors
    ///
    /// Returns the first [`WordError`] encountered.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| Word::new(word.as_ref()).map(WordEntry::new))
            .collect()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: WordEntry) {
        self.entries.push(entry);
    }

    /// Keeps only the first `count` entries.
    ///
    /// Lists that are already short enough are left untouched.
    pub fn truncate(&mut self, count: usize) {
        self.entries.truncate(count);
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Consumes the list, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Returns the length of the longest word, or `0` for an empty list.
    #[must_use]
    pub fn longest_word_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.word().len())
            .max()
            .unwrap_or(0)
    }
}

impl std::ops::Index<usize> for WordList {
    type Output = WordEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl FromIterator<WordEntry> for WordList {
    fn from_iter<T: IntoIterator<Item = WordEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WordList {
    type Item = WordEntry;
    type IntoIter = vec::IntoIter<WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordEntry;
    type IntoIter = slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromStr for WordList {
    type Err = ParseWordListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line, text)| {
                parse_entry(text).map_err(|source| ParseWordListError { line, source })
            })
            .collect()
    }
}

fn parse_entry(text: &str) -> Result<WordEntry, WordError> {
    let (word, clue) = match text.split_once('|') {
        Some((word, clue)) => (word.trim(), Some(clue.trim())),
        None => (text, None),
    };
    let word = Word::new(word)?;
    Ok(match clue {
        Some(clue) if !clue.is_empty() => WordEntry::with_clue(word, clue),
        _ => WordEntry::new(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_clued_lines() {
        let list: WordList = "CAT\n\n  dog|Barks  \nEEL|a|b\n".parse().unwrap();
        let words: Vec<_> = list.iter().map(|entry| entry.word().as_str()).collect();
        assert_eq!(words, ["CAT", "DOG", "EEL"]);
        assert_eq!(list[0].clue(), None);
        assert_eq!(list[1].clue(), Some("Barks"));
        assert_eq!(list[2].clue(), Some("a|b"));
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = "CAT\n\nHOT DOG|Snack".parse::<WordList>().unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.source, WordError::InvalidChar { ch: ' ', index: 3 });
        assert_eq!(err.to_string(), "line 3: invalid character ' ' at index 3");

        let err = "|Clue without word".parse::<WordList>().unwrap_err();
        assert_eq!(err.source, WordError::Empty);
    }

    #[test]
    fn test_truncate_caps_to_count() {
        let mut list =
            WordList::from_words(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]).unwrap();
        list.truncate(DEFAULT_WORD_COUNT);
        assert_eq!(list.len(), 8);
        assert_eq!(list[7].word().as_str(), "H");

        list.truncate(20);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_longest_word_len() {
        assert_eq!(WordList::new().longest_word_len(), 0);
        let list = WordList::from_words(["ant", "badger", "cow"]).unwrap();
        assert_eq!(list.longest_word_len(), 6);
    }
}
